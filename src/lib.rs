pub mod game;
pub mod text;

pub use game::*;

pub(crate) const CHANNEL_SIZE: usize = 5;
