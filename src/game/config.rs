use anyhow::{Error, Result};

pub const DEFAULT_ROW_COUNT: usize = 19;
pub const DEFAULT_COL_COUNT: usize = 19;
pub const DEFAULT_WIN_LENGTH: usize = 3;

/// board dimensions and the number of aligned pieces needed to win
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GameConfig {
    pub row_count: usize,
    pub col_count: usize,
    pub win_length: usize,
}

/// 19 x 19, three in a row
impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            row_count: DEFAULT_ROW_COUNT,
            col_count: DEFAULT_COL_COUNT,
            win_length: DEFAULT_WIN_LENGTH,
        }
    }
}

impl GameConfig {
    pub fn new(row_count: usize, col_count: usize, win_length: usize) -> Self {
        GameConfig {
            row_count,
            col_count,
            win_length,
        }
    }

    /// A win length larger than the board is accepted, such a game never ends.
    pub fn validate(&self) -> Result<()> {
        if self.row_count == 0 || self.col_count == 0 {
            return Err(Error::msg(format!(
                "board dimensions must be positive, got {}x{}",
                self.row_count, self.col_count
            )));
        }
        if self.row_count.checked_mul(self.col_count).is_none() {
            return Err(Error::msg(format!(
                "board too large: {}x{}",
                self.row_count, self.col_count
            )));
        }
        if self.win_length == 0 {
            return Err(Error::msg("win length must be positive"));
        }
        Ok(())
    }
}
