use crate::engine::Move;
use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;
use std::fmt;

pub const BOARD_SIZE: usize = 8;
const SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }

    /// Row of the opponent's back rank, where a man of this color is crowned.
    pub const fn promotion_row(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Black => BOARD_SIZE - 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => f.write_str("red"),
            Self::Black => f.write_str("black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Man,
    King,
}

const RED_MAN_DIRS: [isize; 1] = [-1];
const BLACK_MAN_DIRS: [isize; 1] = [1];
const KING_DIRS: [isize; 2] = [-1, 1];

impl Rank {
    /// Row directions a piece of this rank may travel in.
    pub const fn row_directions(self, color: Color) -> &'static [isize] {
        match (self, color) {
            (Self::King, _) => &KING_DIRS,
            (Self::Man, Color::Red) => &RED_MAN_DIRS,
            (Self::Man, Color::Black) => &BLACK_MAN_DIRS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    pub const fn man(color: Color) -> Self {
        Self {
            color,
            rank: Rank::Man,
        }
    }

    pub const fn king(color: Color) -> Self {
        Self {
            color,
            rank: Rank::King,
        }
    }

    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }

    pub const fn row_directions(self) -> &'static [isize] {
        self.rank.row_directions(self.color)
    }

    pub fn can_move_towards(self, d_row: isize) -> bool {
        self.row_directions().contains(&d_row.signum())
    }

    const fn symbol(self) -> char {
        match (self.color, self.rank) {
            (Color::Red, Rank::Man) => 'r',
            (Color::Red, Rank::King) => 'R',
            (Color::Black, Rank::Man) => 'b',
            (Color::Black, Rank::King) => 'B',
        }
    }

    const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'r' => Some(Self::man(Color::Red)),
            'R' => Some(Self::king(Color::Red)),
            'b' => Some(Self::man(Color::Black)),
            'B' => Some(Self::king(Color::Black)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardCoordinate {
    pub row: usize,
    pub col: usize,
}

impl BoardCoordinate {
    /// Returns `None` when either coordinate falls off the board.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Self::new(row, col)
    }

    pub const fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    pub const fn midpoint(self, other: Self) -> Self {
        Self {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }

    // Off-board coordinates map past the end of the grid so lookups miss.
    const fn square_index(self) -> usize {
        if self.is_on_board() {
            self.row * BOARD_SIZE + self.col
        } else {
            SQUARES
        }
    }

    const fn from_index(sq: usize) -> Self {
        Self {
            row: sq / BOARD_SIZE,
            col: sq % BOARD_SIZE,
        }
    }
}

impl fmt::Display for BoardCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Everything needed to take back a move applied with [`Board::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveUndo {
    pub mv: Move,
    pub piece: Piece,
    pub captured: Option<(BoardCoordinate, Piece)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardParseError {
    WrongRowCount(usize),
    WrongColumnCount { row: usize, len: usize },
    UnknownSymbol { row: usize, col: usize, symbol: char },
    LightSquare { row: usize, col: usize },
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongRowCount(n) => write!(f, "expected {BOARD_SIZE} rows, found {n}"),
            Self::WrongColumnCount { row, len } => {
                write!(f, "row {row} has {len} squares, expected {BOARD_SIZE}")
            }
            Self::UnknownSymbol { row, col, symbol } => {
                write!(f, "unknown symbol {symbol:?} at ({row},{col})")
            }
            Self::LightSquare { row, col } => write!(f, "piece on light square ({row},{col})"),
        }
    }
}

impl std::error::Error for BoardParseError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    // Row-major mailbox, index = row * 8 + col
    #[serde(with = "BigArray")]
    grid: [Option<Piece>; SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard opening layout: black on rows 0-2, red on rows 5-7, dark squares only.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_initial_position();
        board
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            grid: [None; SQUARES],
        }
    }

    fn setup_initial_position(&mut self) {
        for sq in 0..SQUARES {
            let pos = BoardCoordinate::from_index(sq);
            if !pos.is_dark() {
                continue;
            }
            match pos.row {
                0..=2 => self.add_piece(pos, Piece::man(Color::Black)),
                5..=7 => self.add_piece(pos, Piece::man(Color::Red)),
                _ => {}
            }
        }
    }

    #[must_use]
    pub fn get_piece(&self, pos: BoardCoordinate) -> Option<Piece> {
        self.grid.get(pos.square_index()).copied().flatten()
    }

    pub fn is_empty_at(&self, pos: BoardCoordinate) -> bool {
        self.get_piece(pos).is_none()
    }

    pub fn set_piece(&mut self, pos: BoardCoordinate, piece: Option<Piece>) {
        if let Some(cell) = self.grid.get_mut(pos.square_index()) {
            *cell = piece;
        }
    }

    pub fn add_piece(&mut self, pos: BoardCoordinate, piece: Piece) {
        self.set_piece(pos, Some(piece));
    }

    pub fn take_piece(&mut self, pos: BoardCoordinate) -> Option<Piece> {
        self.grid.get_mut(pos.square_index()).and_then(Option::take)
    }

    /// Occupied squares of one color in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (BoardCoordinate, Piece)> + '_ {
        self.grid.iter().enumerate().filter_map(move |(sq, cell)| {
            cell.filter(|piece| piece.color == color)
                .map(|piece| (BoardCoordinate::from_index(sq), piece))
        })
    }

    pub fn count_pieces(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    /// Moves a piece without checking legality. A two-row move removes the piece
    /// it jumps over, and a man reaching its promotion row is crowned.
    ///
    /// Returns `None` and leaves the board untouched when `mv.from` is empty.
    pub fn apply_move(&mut self, mv: &Move) -> Option<MoveUndo> {
        let piece = self.take_piece(mv.from)?;

        let captured = if mv.from.row.abs_diff(mv.to.row) == 2 {
            let mid = mv.from.midpoint(mv.to);
            self.take_piece(mid).map(|cap| (mid, cap))
        } else {
            None
        };

        let landed = if mv.to.row == piece.color.promotion_row() {
            Piece::king(piece.color)
        } else {
            piece
        };
        self.add_piece(mv.to, landed);

        Some(MoveUndo {
            mv: *mv,
            piece,
            captured,
        })
    }

    pub fn undo_move(&mut self, undo: &MoveUndo) {
        self.set_piece(undo.mv.to, None);
        self.add_piece(undo.mv.from, undo.piece);
        if let Some((pos, cap)) = undo.captured {
            self.add_piece(pos, cap);
        }
    }

    /// Renders the board as eight lines of `.`, `r`, `R`, `b`, `B`, row 0 first.
    pub fn to_diagram(&self) -> String {
        let mut out = String::with_capacity(SQUARES + BOARD_SIZE);
        for (sq, cell) in self.grid.iter().enumerate() {
            out.push(cell.map_or('.', Piece::symbol));
            if sq % BOARD_SIZE == BOARD_SIZE - 1 {
                out.push('\n');
            }
        }
        out
    }

    /// Parses the format produced by [`Board::to_diagram`]. Blank lines and
    /// surrounding whitespace are ignored.
    pub fn from_diagram(diagram: &str) -> Result<Self, BoardParseError> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(BoardParseError::WrongRowCount(rows.len()));
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != BOARD_SIZE {
                return Err(BoardParseError::WrongColumnCount { row, len });
            }
            for (col, symbol) in line.chars().enumerate() {
                if symbol == '.' {
                    continue;
                }
                let piece = Piece::from_symbol(symbol)
                    .ok_or(BoardParseError::UnknownSymbol { row, col, symbol })?;
                let pos = BoardCoordinate { row, col };
                if !pos.is_dark() {
                    return Err(BoardParseError::LightSquare { row, col });
                }
                board.add_piece(pos, piece);
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_diagram())
    }
}
