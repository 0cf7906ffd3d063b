use crate::game::piece::{Color, PieceColor, Square};

/// (row step, col step), in scan order:
/// horizontal, vertical, diagonal down-right, diagonal down-left
pub(crate) const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// find the first run of `win_length` same colored pieces
///
/// directions are tried in `DIRECTIONS` order, and within one direction the run
/// starts are visited row by row, left to right.
#[inline]
pub(crate) fn first_run(
    squares: &[Square],
    row_count: usize,
    col_count: usize,
    win_length: usize,
) -> Option<Color> {
    // no run can fit
    if win_length == 0 || win_length > row_count.max(col_count) {
        return None;
    }
    DIRECTIONS.iter().find_map(|&direction| {
        (0..row_count)
            .flat_map(|row| (0..col_count).map(move |col| (row, col)))
            .find_map(|start| {
                run_color_at(squares, row_count, col_count, win_length, start, direction)
            })
    })
}

/// the color of a `win_length` run starting at `start`, if the whole run fits and
/// is made of one non-empty color
#[inline(always)]
fn run_color_at(
    squares: &[Square],
    row_count: usize,
    col_count: usize,
    win_length: usize,
    (row, col): (usize, usize),
    (d_row, d_col): (isize, isize),
) -> Option<Color> {
    let last = win_length.checked_sub(1)?;
    // the far end must be on the board
    shift(row, d_row, last).filter(|&r| r < row_count)?;
    shift(col, d_col, last).filter(|&c| c < col_count)?;
    let color = squares[row * col_count + col].occupant().color()?;
    let target = PieceColor::from(color);
    (1..win_length)
        .map(|step| {
            let r = shift(row, d_row, step)?;
            let c = shift(col, d_col, step)?;
            Some(squares[r * col_count + c].occupant())
        })
        .all(|occupant| occupant == Some(target))
        .then(|| color)
}

/// move `steps` squares along one unit axis step, `None` past the edges of `usize`
#[inline(always)]
fn shift(start: usize, delta: isize, steps: usize) -> Option<usize> {
    match delta {
        0 => Some(start),
        d if d > 0 => start.checked_add(steps),
        _ => start.checked_sub(steps),
    }
}
