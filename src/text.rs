//! Plain text view of a game.
//!
//! Black is drawn as `x`, white as `o` and empty squares as `-`.
//! This module only reads the public game surface.
use crate::game::{Board, Game, GameConfig, PieceColor};
use anyhow::{Error, Result};

impl PieceColor {
    pub fn glyph(&self) -> char {
        match self {
            PieceColor::Black => 'x',
            PieceColor::White => 'o',
            PieceColor::Empty => '-',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<PieceColor> {
        match glyph {
            'x' => Some(PieceColor::Black),
            'o' => Some(PieceColor::White),
            '-' => Some(PieceColor::Empty),
            _ => None,
        }
    }
}

/// One line of glyphs per row.
///
/// The ruler adds a header with the last digit of every column index
/// and prefixes each row with the last digit of its row index.
pub fn render_board(board: &Board, with_ruler: bool) -> String {
    let mut lines = Vec::with_capacity(board.row_count() + 1);
    if with_ruler {
        let header: String = (0..board.col_count()).map(last_digit).collect();
        lines.push(format!(" {}", header));
    }
    for (row, squares) in board.rows().enumerate() {
        let mut line = String::with_capacity(board.col_count() + 1);
        if with_ruler {
            line.push(last_digit(row));
        }
        line.extend(squares.iter().map(|s| s.occupant().glyph()));
        lines.push(line);
    }
    lines.join("\n")
}

/// `> "x" won!` once ended, otherwise whose turn it is
pub fn render_status(game: &Game) -> String {
    match game.winner() {
        Some(winner) => format!("> \"{}\" won!", PieceColor::from(winner).glyph()),
        None => format!(
            "> Place a \"{}\" piece",
            PieceColor::from(game.next_player()).glyph()
        ),
    }
}

/// ruled board followed by the status line
pub fn render_game(game: &Game) -> String {
    format!(
        "{}\n{}",
        render_board(game.board(), true),
        render_status(game)
    )
}

/// Build a board from glyph rows, such as the output of `render_board` without ruler.
///
/// Blank lines and surrounding whitespace are ignored.
pub fn parse_board(text: &str, win_length: usize) -> Result<Board> {
    let rows: Vec<Vec<PieceColor>> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.chars()
                .map(|c| {
                    PieceColor::from_glyph(c)
                        .ok_or_else(|| Error::msg(format!("unknown glyph {:?}", c)))
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<_>>()?;
    let col_count = rows.first().map(Vec::len).unwrap_or(0);
    if rows.iter().any(|row| row.len() != col_count) {
        return Err(Error::msg("rows of different length"));
    }
    let mut board = Board::new(&GameConfig::new(rows.len(), col_count, win_length))?;
    for (row, occupants) in rows.iter().enumerate() {
        for (col, occupant) in occupants.iter().enumerate() {
            if let Some(color) = occupant.color() {
                board.place(row, col, color)?;
            }
        }
    }
    Ok(board)
}

fn last_digit(index: usize) -> char {
    char::from(b'0' + (index % 10) as u8)
}
