use std::fmt::{Display, Formatter};

/// Represents player action (black or white)
#[derive(Clone, PartialEq, Eq, Copy, Debug, Hash)]
#[repr(u8)]
pub enum Color {
    Black = 1,
    White = 2,
}

impl Color {
    /// the other player
    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => f.write_str("black"),
            Color::White => f.write_str("white"),
        }
    }
}

/// represents square occupant: Empty, Black, White
#[derive(Clone, PartialEq, Eq, Copy, Debug, Hash)]
#[repr(u8)]
pub enum PieceColor {
    Empty = 0,
    Black = 1,
    White = 2,
}

impl PieceColor {
    /// `None` for `Empty`
    pub fn color(&self) -> Option<Color> {
        match self {
            PieceColor::Empty => None,
            PieceColor::Black => Some(Color::Black),
            PieceColor::White => Some(Color::White),
        }
    }

    /// `Empty` has no opposite.
    pub fn opposite(&self) -> Option<PieceColor> {
        self.color().map(|c| c.opposite().into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PieceColor::Empty)
    }
}

impl Default for PieceColor {
    fn default() -> Self {
        PieceColor::Empty
    }
}

impl From<Color> for PieceColor {
    #[inline(always)]
    fn from(c: Color) -> Self {
        match c {
            Color::Black => PieceColor::Black,
            Color::White => PieceColor::White,
        }
    }
}

/// A single cell of the board.
///
/// `row` and `col` are the identity of the square and never change.
/// Only `Board` writes the occupant.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Square {
    row: usize,
    col: usize,
    occupant: PieceColor,
}

impl Square {
    pub(crate) fn new(row: usize, col: usize) -> Self {
        Square {
            row,
            col,
            occupant: PieceColor::Empty,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn occupant(&self) -> PieceColor {
        self.occupant
    }

    pub(crate) fn set_occupant(&mut self, occupant: PieceColor) {
        self.occupant = occupant;
    }
}
