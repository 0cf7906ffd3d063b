use crate::game::board_utility::first_run;
use crate::game::config::GameConfig;
use crate::game::piece::{Color, PieceColor, Square};
use anyhow::{Error, Result};

/// The grid of squares and the win rule.
///
/// Squares are stored row-major in a single vector; the board is never resized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: Vec<Square>,
    row_count: usize,
    col_count: usize,
    win_length: usize,
    e_count: usize,
}

impl Board {
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Board::build(config))
    }

    /// caller guarantees `config` is valid
    pub(crate) fn build(config: &GameConfig) -> Self {
        let GameConfig {
            row_count,
            col_count,
            win_length,
        } = *config;
        let squares = (0..row_count)
            .flat_map(|row| (0..col_count).map(move |col| Square::new(row, col)))
            .collect();
        Board {
            squares,
            row_count,
            col_count,
            win_length,
            e_count: row_count * col_count,
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn col_count(&self) -> usize {
        self.col_count
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// `None` if out of range
    pub fn square(&self, row: usize, col: usize) -> Option<&Square> {
        self.index(row, col).map(|i| &self.squares[i])
    }

    /// `None` if out of range
    pub fn occupant(&self, row: usize, col: usize) -> Option<PieceColor> {
        self.square(row, col).map(Square::occupant)
    }

    /// all squares, row by row
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }

    /// one slice per row, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.col_count)
    }

    pub fn empty_count(&self) -> usize {
        self.e_count
    }

    pub fn is_full(&self) -> bool {
        self.e_count == 0
    }

    /// in range and empty
    pub fn is_placeable(&self, row: usize, col: usize) -> bool {
        matches!(self.occupant(row, col), Some(PieceColor::Empty))
    }

    /// put a piece on an empty square
    pub fn place(&mut self, row: usize, col: usize, color: Color) -> Result<()> {
        match self.index(row, col) {
            None => unlikely_error(Err(Error::msg(format!(
                "field range exceeded: ({}, {})",
                row, col
            )))),
            Some(i) => {
                let square = &mut self.squares[i];
                if !square.occupant().is_empty() {
                    unlikely_error(Err(Error::msg(format!(
                        "already occupied: ({}, {})",
                        row, col
                    ))))
                } else {
                    square.set_occupant(color.into());
                    self.e_count -= 1;
                    Ok(())
                }
            }
        }
    }

    /// The color of the first `win_length` run found.
    ///
    /// Scan order: horizontal, vertical, diagonal down-right, diagonal down-left;
    /// within each direction, rows top to bottom and columns left to right.
    /// When both colors have a run, this order decides which one is reported.
    pub fn detect_win(&self) -> Option<Color> {
        first_run(
            &self.squares,
            self.row_count,
            self.col_count,
            self.win_length,
        )
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.row_count && col < self.col_count {
            Some(row * self.col_count + col)
        } else {
            None
        }
    }
}

#[cold]
fn unlikely_error<T>(e: T) -> T {
    e
}

#[cfg(test)]
mod test_board {
    use super::Color::{Black, White};
    use super::*;

    fn board(rows: usize, cols: usize, win_length: usize) -> Board {
        Board::new(&GameConfig::new(rows, cols, win_length)).unwrap()
    }

    #[test]
    fn test_new_board() {
        let b = board(4, 6, 3);
        assert_eq!((b.row_count(), b.col_count(), b.win_length()), (4, 6, 3));
        assert_eq!(b.squares().count(), 24);
        assert_eq!(b.empty_count(), 24);
        for (i, square) in b.squares().enumerate() {
            assert_eq!((square.row(), square.col()), (i / 6, i % 6));
            assert_eq!(square.occupant(), PieceColor::Empty);
        }
        assert_eq!(b.rows().count(), 4);
        assert!(b.rows().all(|row| row.len() == 6));
        assert_eq!(b.square(3, 5).map(|s| (s.row(), s.col())), Some((3, 5)));
    }

    #[test]
    fn test_bad_config() {
        assert!(Board::new(&GameConfig::new(0, 19, 3)).is_err());
        assert!(Board::new(&GameConfig::new(19, 0, 3)).is_err());
        assert!(Board::new(&GameConfig::new(19, 19, 0)).is_err());
    }

    #[test]
    fn test_placeable() {
        let mut b = board(3, 3, 3);
        for row in 0..3 {
            for col in 0..3 {
                assert!(b.is_placeable(row, col));
            }
        }
        b.place(1, 2, White).unwrap();
        assert!(!b.is_placeable(1, 2));
        assert_eq!(b.occupant(1, 2), Some(PieceColor::White));
        assert_eq!(b.empty_count(), 8);
    }

    #[test]
    fn test_out_of_range() {
        let mut b = board(3, 4, 3);
        assert!(!b.is_placeable(3, 0));
        assert!(!b.is_placeable(0, 4));
        assert!(!b.is_placeable(usize::MAX, usize::MAX));
        assert!(b.square(3, 0).is_none());
        if b.place(17, 21, Black).is_ok() {
            panic!("error not thrown")
        }
        assert_eq!(b.empty_count(), 12);
    }

    #[test]
    fn test_place_occupied() {
        let mut b = board(3, 3, 3);
        b.place(0, 0, Black).unwrap();
        assert!(b.place(0, 0, White).is_err());
        assert_eq!(b.occupant(0, 0), Some(PieceColor::Black));
        assert_eq!(b.empty_count(), 8);
    }

    #[test]
    fn test_empty_board_no_win() {
        assert_eq!(board(19, 19, 3).detect_win(), None);
        assert_eq!(board(1, 1, 1).detect_win(), None);
    }

    #[test]
    fn test_short_runs_no_win() {
        let mut b = board(5, 5, 3);
        b.place(0, 0, Black).unwrap();
        b.place(0, 1, Black).unwrap();
        b.place(1, 0, Black).unwrap();
        b.place(1, 1, White).unwrap();
        b.place(2, 2, White).unwrap();
        b.place(4, 4, Black).unwrap();
        b.place(3, 3, Black).unwrap();
        assert_eq!(b.detect_win(), None);
    }

    #[test]
    fn test_win_directions() {
        let cases: [[(usize, usize); 3]; 4] = [
            [(0, 0), (0, 1), (0, 2)],
            [(0, 0), (1, 0), (2, 0)],
            [(0, 0), (1, 1), (2, 2)],
            [(0, 2), (1, 1), (2, 0)],
        ];
        for run in cases {
            let mut b = board(3, 3, 3);
            for (row, col) in run {
                b.place(row, col, Black).unwrap();
            }
            assert_eq!(b.detect_win(), Some(Black));
        }
    }

    #[test]
    fn test_win_on_large_board() {
        let mut b = board(19, 19, 5);
        for i in 0..5 {
            b.place(10 + i, 14 - i, White).unwrap();
        }
        assert_eq!(b.detect_win(), Some(White));
    }

    #[test]
    fn test_win_length_exceeds_board() {
        let mut b = board(2, 2, 3);
        b.place(0, 0, Black).unwrap();
        b.place(0, 1, Black).unwrap();
        b.place(1, 0, Black).unwrap();
        b.place(1, 1, Black).unwrap();
        assert!(b.is_full());
        assert_eq!(b.detect_win(), None);
    }
}
