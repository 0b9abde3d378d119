use std::fmt;

use crate::error::{BoardError, Result};
use crate::{MAX_SIZE, MIN_CONNECT, MIN_SIZE};

/// One of the two token identities
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Token {
    X,
    O,
}

impl Token {
    /// The other token identity
    pub fn other(self) -> Self {
        match self {
            Token::X => Token::O,
            Token::O => Token::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Token::X => 'X',
            Token::O => 'O',
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn token(&self) -> Option<Token> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Token::X),
            Cell::O => Some(Token::O),
        }
    }

    pub fn symbol(&self) -> char {
        self.token().map_or(' ', Token::symbol)
    }
}

impl From<Token> for Cell {
    fn from(token: Token) -> Self {
        match token {
            Token::X => Cell::X,
            Token::O => Cell::O,
        }
    }
}

/// The state of a game as seen from the board alone
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Status {
    Playing,
    Won(Token),
    Draw,
}

/// Direction vectors (row, column) walked forward from each starting cell.
/// Every maximal run is found from its first cell in one of these.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// An N×N Connect M board
///
/// Cells are stored row-major with row 0 at the top, so tokens fall towards
/// row N - 1. Each column's occupied cells are contiguous from the bottom.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    size: usize,
    connect: usize,
    cells: Vec<Cell>,
    // number of tokens in each column
    heights: Vec<usize>,
    num_moves: usize,
}

impl Board {
    /// Creates an empty `size`×`size` board won by `connect` tokens in a line
    pub fn new(size: usize, connect: usize) -> Result<Self> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize(size));
        }
        if !(MIN_CONNECT..=size).contains(&connect) {
            return Err(BoardError::InvalidConnect { size, connect });
        }
        Ok(Self {
            size,
            connect,
            cells: vec![Cell::Empty; size * size],
            heights: vec![0; size],
            num_moves: 0,
        })
    }

    /// Builds a board by playing zero-indexed columns, alternating X and O
    /// starting with X
    pub fn from_moves(size: usize, connect: usize, moves: &[usize]) -> Result<Self> {
        let mut board = Self::new(size, connect)?;
        let mut token = Token::X;
        for &column in moves {
            // abort if the position is decided before all moves are played
            if board.is_terminal() {
                return Err(BoardError::GameOver);
            }
            board.play_checked(column, token)?;
            token = token.other();
        }
        Ok(board)
    }

    /// Builds a board from rows of `X`, `O` and `.` (empty), top row first
    ///
    /// Rows must form a square grid and every token must rest on the bottom
    /// row or on another token.
    pub fn from_rows<S: AsRef<str>>(connect: usize, rows: &[S]) -> Result<Self> {
        let size = rows.len();
        let mut board = Self::new(size, connect)?;

        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != size {
                return Err(BoardError::Parse(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    size
                )));
            }
            for (column, symbol) in line.chars().enumerate() {
                let cell = match symbol {
                    'X' | 'x' => Cell::X,
                    'O' | 'o' => Cell::O,
                    '.' | ' ' => Cell::Empty,
                    _ => {
                        return Err(BoardError::Parse(format!(
                            "unknown cell '{}' at row {}, column {}",
                            symbol, row, column
                        )))
                    }
                };
                board.cells[row * size + column] = cell;
            }
        }

        for column in 0..size {
            let mut height = 0;
            for row in (0..size).rev() {
                if board.cell(row, column).is_empty() {
                    break;
                }
                height += 1;
            }
            // anything above the first gap is floating
            if let Some(row) = (0..size - height).find(|&row| !board.cell(row, column).is_empty()) {
                return Err(BoardError::FloatingToken { row, column });
            }
            board.heights[column] = height;
            board.num_moves += height;
        }
        Ok(board)
    }

    /// The width and height of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// The number of tokens in a line needed to win
    pub fn connect(&self) -> usize {
        self.connect
    }

    /// The number of tokens on the board
    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    /// The cell at `row`, `column`
    ///
    /// # Panics
    /// Panics if `row` or `column` is not below [`Board::size`]. Use
    /// [`Board::get`] for coordinates that may be off the board.
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row * self.size + column]
    }

    /// The cell at `row`, `column`, or `None` off the board
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row < self.size && column < self.size {
            Some(self.cell(row, column))
        } else {
            None
        }
    }

    /// The number of tokens in `column`, or `None` if it is out of range
    pub fn column_height(&self, column: usize) -> Option<usize> {
        self.heights.get(column).copied()
    }

    /// Whether a token can be dropped into `column`
    pub fn is_valid_move(&self, column: usize) -> bool {
        column < self.size && self.cell(0, column).is_empty()
    }

    /// All playable columns in ascending order
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..self.size).filter(|&c| self.is_valid_move(c)).collect()
    }

    /// Drops `token` into `column`, returning whether the move was made
    ///
    /// The board is left untouched if the column is full or out of range.
    pub fn play(&mut self, column: usize, token: Token) -> bool {
        self.play_checked(column, token).is_ok()
    }

    /// Drops `token` into `column`, returning the row it landed in
    pub fn play_checked(&mut self, column: usize, token: Token) -> Result<usize> {
        if column >= self.size {
            return Err(BoardError::ColumnOutOfRange {
                column,
                size: self.size,
            });
        }
        if !self.is_valid_move(column) {
            return Err(BoardError::ColumnFull(column));
        }
        let row = self.size - 1 - self.heights[column];
        self.cells[row * self.size + column] = token.into();
        self.heights[column] += 1;
        self.num_moves += 1;
        Ok(row)
    }

    /// A copy of this board with `token` dropped into `column`, or `None` if
    /// the column cannot take another token
    pub fn dropped(&self, column: usize, token: Token) -> Option<Self> {
        let mut next = self.clone();
        if next.play(column, token) {
            Some(next)
        } else {
            None
        }
    }

    /// Removes the topmost token from `column`, if any
    pub fn undo(&mut self, column: usize) {
        if column >= self.size || self.heights[column] == 0 {
            return;
        }
        let row = self.size - self.heights[column];
        self.cells[row * self.size + column] = Cell::Empty;
        self.heights[column] -= 1;
        self.num_moves -= 1;
    }

    /// Whether `token` has at least `connect` cells in a row, column or
    /// diagonal
    pub fn has_line(&self, token: Token) -> bool {
        let target = Cell::from(token);
        let size = self.size as isize;
        for row in 0..self.size {
            for column in 0..self.size {
                if self.cell(row, column) != target {
                    continue;
                }
                for &(dr, dc) in DIRECTIONS.iter() {
                    let mut run = 1;
                    let (mut r, mut c) = (row as isize + dr, column as isize + dc);
                    while r >= 0
                        && r < size
                        && c >= 0
                        && c < size
                        && self.cell(r as usize, c as usize) == target
                    {
                        run += 1;
                        if run >= self.connect {
                            return true;
                        }
                        r += dr;
                        c += dc;
                    }
                }
            }
        }
        false
    }

    /// Whether no column can take another token
    pub fn is_full(&self) -> bool {
        self.num_moves == self.size * self.size
    }

    /// Whether either token has a line or the board is full
    pub fn is_terminal(&self) -> bool {
        self.has_line(Token::X) || self.has_line(Token::O) || self.is_full()
    }

    /// Whether the board is full with no line for either token
    pub fn is_draw(&self) -> bool {
        self.is_full() && !self.has_line(Token::X) && !self.has_line(Token::O)
    }

    /// The token holding a line, X checked first
    pub fn winner(&self) -> Option<Token> {
        [Token::X, Token::O]
            .iter()
            .copied()
            .find(|&token| self.has_line(token))
    }

    pub fn status(&self) -> Status {
        match self.winner() {
            Some(token) => Status::Won(token),
            None if self.is_full() => Status::Draw,
            None => Status::Playing,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = format!("+{}", "---+".repeat(self.size));
        writeln!(f, "{}", border)?;
        for row in 0..self.size {
            write!(f, "|")?;
            for column in 0..self.size {
                write!(f, " {} |", self.cell(row, column).symbol())?;
            }
            writeln!(f)?;
            writeln!(f, "{}", border)?;
        }
        Ok(())
    }
}
