//! An agent to choose moves in Connect M

use crate::{board::*, evaluation::evaluate, Score};

/// Stands in for an unbounded score in the search window
const INFINITY: Score = Score::MAX;

/// The pair of roles a search is run for
///
/// `mine` is the maximizing side and `theirs` the minimizing side. Running the
/// same search for the other player only needs [`Perspective::swapped`]; the
/// board is never touched.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Perspective {
    pub mine: Token,
    pub theirs: Token,
}

impl Perspective {
    /// The perspective of `mine` playing against the other token
    pub fn new(mine: Token) -> Self {
        Self {
            mine,
            theirs: mine.other(),
        }
    }

    pub fn swapped(self) -> Self {
        Self {
            mine: self.theirs,
            theirs: self.mine,
        }
    }
}

/// The column chosen by a search and the score backing it
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub column: usize,
    pub score: Score,
}

/// An agent to pick moves with depth-limited alpha-beta minimax
///
/// # Notes
/// The agent owns a private copy of the position and plays and retracts
/// hypothetical moves on it, so the board it was created from is never
/// modified. Moves are always tried in ascending column order and ties keep
/// the lowest column, which makes every search reproducible.
#[derive(Clone)]
pub struct Searcher {
    board: Board,
    perspective: Perspective,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` for `perspective.mine` to move on a copy of `board`
    pub fn new(board: &Board, perspective: Perspective) -> Self {
        Self {
            board: board.clone(),
            perspective,
            node_count: 0,
        }
    }

    pub fn perspective(&self) -> Perspective {
        self.perspective
    }

    /// Picks the column to play, or `None` when there is nothing to search
    ///
    /// A depth of 0 performs no search and always returns `None`.
    pub fn select_move(&mut self, depth: usize) -> Option<usize> {
        self.search(depth).map(|result| result.column)
    }

    /// Performs a top-level search `depth` plies deep
    ///
    /// Returns the best column and its score, or `None` if `depth` is 0 or no
    /// column is playable
    pub fn search(&mut self, depth: usize) -> Option<SearchResult> {
        if depth == 0 {
            return None;
        }
        let mut alpha = -INFINITY;
        let mut best: Option<SearchResult> = None;

        for column in self.board.legal_moves() {
            self.node_count += 1;
            self.board.play(column, self.perspective.mine);
            // the root is a pure maximizer, so beta stays unbounded
            let score = self.minimize(alpha, INFINITY, depth - 1);
            self.board.undo(column);

            if best.map_or(true, |b| score > b.score) {
                best = Some(SearchResult { column, score });
            }
            if score > alpha {
                alpha = score;
            }
        }

        if let Some(result) = best {
            log::debug!(
                "{} chose column {} (score {}) after {} nodes at depth {}",
                self.perspective.mine,
                result.column,
                result.score,
                self.node_count,
                depth
            );
        }
        best
    }

    /// Scores the position with `mine` to move
    fn maximize(&mut self, mut alpha: Score, beta: Score, depth: usize) -> Score {
        if depth == 0 || self.board.is_terminal() {
            return evaluate(&self.board, self.perspective);
        }

        let mut value = -INFINITY;
        for column in self.board.legal_moves() {
            self.node_count += 1;
            self.board.play(column, self.perspective.mine);
            let score = self.minimize(alpha, beta, depth - 1);
            self.board.undo(column);

            value = value.max(score);
            // the minimizer above will never allow this branch
            if value >= beta {
                return value;
            }
            alpha = alpha.max(value);
        }
        value
    }

    /// Scores the position with `theirs` to move
    fn minimize(&mut self, alpha: Score, mut beta: Score, depth: usize) -> Score {
        if depth == 0 || self.board.is_terminal() {
            return evaluate(&self.board, self.perspective);
        }

        let mut value = INFINITY;
        for column in self.board.legal_moves() {
            self.node_count += 1;
            self.board.play(column, self.perspective.theirs);
            let score = self.maximize(alpha, beta, depth - 1);
            self.board.undo(column);

            value = value.min(score);
            // the maximizer above already has something better
            if value <= alpha {
                return value;
            }
            beta = beta.min(value);
        }
        value
    }
}

/// Picks the column `perspective.mine` should play on `board`
pub fn select_move(board: &Board, perspective: Perspective, depth: usize) -> Option<usize> {
    Searcher::new(board, perspective).select_move(depth)
}

impl std::ops::Deref for Searcher {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &self.board
    }
}
