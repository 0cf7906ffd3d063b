use crate::game::board::Board;
use crate::game::config::GameConfig;
use crate::game::piece::Color;
use anyhow::Result;
#[allow(unused_imports)]
use log::trace;
use log::{error, info};
use std::fmt::{Display, Formatter};

/// the two states of a match
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    InProgress,
    /// terminal, no more moves accepted
    Ended { winner: Color },
}

/// why a placement was rejected
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlacementFailure {
    OutOfBounds,
    Occupied,
    GameAlreadyEnded,
}

impl Display for PlacementFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementFailure::OutOfBounds => f.write_str("square out of bounds"),
            PlacementFailure::Occupied => f.write_str("square already occupied"),
            PlacementFailure::GameAlreadyEnded => f.write_str("game already ended"),
        }
    }
}

/// Outcome of one `proceed` call.
///
/// `color` is the player who attempted the move and `rival` its opponent.
/// `winner` is set only by the placement that ended the game.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PlacementReport {
    pub color: Color,
    pub rival: Color,
    pub row: usize,
    pub col: usize,
    pub is_success: bool,
    pub failure: Option<PlacementFailure>,
    pub winner: Option<Color>,
}

/// One match: a board, whose turn it is, and whether someone has won.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    next_player: Color,
    state: GameState,
    move_count: usize,
}

impl Game {
    /// 19 x 19 board, three in a row wins
    pub fn new() -> Self {
        Game::from_board(Board::build(&GameConfig::default()))
    }

    pub fn with_config(config: &GameConfig) -> Result<Self> {
        Ok(Game::from_board(Board::new(config)?))
    }

    fn from_board(board: Board) -> Self {
        Game {
            board,
            next_player: Color::Black,
            state: GameState::InProgress,
            move_count: 0,
        }
    }

    /// read only: all mutation goes through `proceed`
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next_player(&self) -> Color {
        self.next_player
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.state, GameState::Ended { .. })
    }

    pub fn winner(&self) -> Option<Color> {
        match self.state {
            GameState::InProgress => None,
            GameState::Ended { winner } => Some(winner),
        }
    }

    /// number of successful placements
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Place a piece for the player whose turn it is.
    ///
    /// Rejected moves (ended game, occupied or out of range square) change nothing
    /// and come back with `is_success == false`.
    pub fn proceed(&mut self, row: usize, col: usize) -> PlacementReport {
        let color = self.next_player;
        let mut report = PlacementReport {
            color,
            rival: color.opposite(),
            row,
            col,
            is_success: false,
            failure: None,
            winner: None,
        };
        if let Some(failure) = self.check_placement(row, col) {
            #[cfg(debug_assertions)]
            trace!("{} move ({}, {}) rejected: {}", color, row, col, failure);
            report.failure = Some(failure);
            return report;
        }
        if let Err(e) = self.board.place(row, col, color) {
            error!("placement at ({}, {}) failed after check: {}", row, col, e);
            report.failure = Some(PlacementFailure::Occupied);
            return report;
        }
        report.is_success = true;
        self.move_count += 1;
        // the flip happens before win detection, ending the game freezes it anyway
        self.next_player = report.rival;
        if let Some(winner) = self.board.detect_win() {
            info!("{} wins after {} moves", winner, self.move_count);
            self.state = GameState::Ended { winner };
            report.winner = Some(winner);
        }
        report
    }

    fn check_placement(&self, row: usize, col: usize) -> Option<PlacementFailure> {
        if self.is_ended() {
            Some(PlacementFailure::GameAlreadyEnded)
        } else if self.board.square(row, col).is_none() {
            Some(PlacementFailure::OutOfBounds)
        } else if !self.board.is_placeable(row, col) {
            Some(PlacementFailure::Occupied)
        } else {
            None
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
