//! Static evaluation of Connect M positions
//!
//! A position is scored from the point of view of a [`Perspective`]: a line
//! for `mine` scores [`WIN_SCORE`], a line for `theirs` scores `-WIN_SCORE`,
//! and anything else is the sum of every length-M segment on the board.
//!
//! # Segment Scoring
//! A segment holding tokens of both sides is blocked and scores 0. A segment
//! holding `k` tokens of only one side scores `10^k`, positive for `mine` and
//! negative for `theirs`, so denser threats outweigh many sparse ones.

use crate::{board::*, search::Perspective, Score, WIN_SCORE};

/// Scores `board` for the side given by `perspective`
pub fn evaluate(board: &Board, perspective: Perspective) -> Score {
    // mine is checked first, so an overdetermined board counts as a win
    if board.has_line(perspective.mine) {
        return WIN_SCORE;
    }
    if board.has_line(perspective.theirs) {
        return -WIN_SCORE;
    }

    let mine = Cell::from(perspective.mine);
    let theirs = Cell::from(perspective.theirs);

    let mut score = 0;
    for_each_segment(board, |cells| {
        let (mut own, mut opp) = (0, 0);
        for cell in cells {
            if cell == mine {
                own += 1;
            } else if cell == theirs {
                opp += 1;
            }
        }
        score += segment_score(own, opp);
    });
    score
}

/// The contribution of one segment holding `own` and `opp` tokens
pub fn segment_score(own: u32, opp: u32) -> Score {
    match (own, opp) {
        (0, 0) => 0,
        (own, 0) => (10 as Score).pow(own),
        (0, opp) => -(10 as Score).pow(opp),
        _ => 0,
    }
}

/// The number of length-M segments on `board` across all four line families
pub fn segment_count(board: &Board) -> usize {
    let mut count = 0;
    for_each_segment(board, |_| count += 1);
    count
}

/// Calls `f` with the cells of every length-M segment: horizontals, then
/// verticals, then both diagonals
fn for_each_segment<F>(board: &Board, mut f: F)
where
    F: FnMut(&mut dyn Iterator<Item = Cell>),
{
    let size = board.size();
    let connect = board.connect();
    let starts = size - connect + 1;

    for &(dr, dc) in DIRECTIONS.iter() {
        let rows = if dr == 0 { 0..size } else { 0..starts };
        let columns = match dc {
            0 => 0..size,
            1 => 0..starts,
            // walking left, so segments start from column M - 1 onwards
            _ => connect - 1..size,
        };
        for row in rows {
            for column in columns.clone() {
                let mut cells = (0..connect as isize).map(|i| {
                    board.cell(
                        (row as isize + dr * i) as usize,
                        (column as isize + dc * i) as usize,
                    )
                });
                f(&mut cells);
            }
        }
    }
}
