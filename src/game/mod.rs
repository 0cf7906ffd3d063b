mod board;
mod board_utility;
mod config;
#[allow(clippy::module_inception)]
mod game;
mod host;
mod piece;

pub use board::Board;
pub use config::{GameConfig, DEFAULT_COL_COUNT, DEFAULT_ROW_COUNT, DEFAULT_WIN_LENGTH};
pub use game::{Game, GameState, PlacementFailure, PlacementReport};
pub use host::{new_game_host, HostCommand, HostResponse};
pub use piece::{Color, PieceColor, Square};
