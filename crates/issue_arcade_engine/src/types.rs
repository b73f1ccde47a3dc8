//! Core domain types shared by both game variants.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which game a board belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum Variant {
    /// 3x3 board, three in a row, marks placed directly.
    #[strum(to_string = "tictactoe", serialize = "tic_tac_toe", serialize = "ttt")]
    TicTacToe,
    /// 6 rows by 7 columns, four in a row, pieces fall to the lowest free row.
    #[strum(to_string = "connect4", serialize = "connect_four", serialize = "c4")]
    ConnectFour,
}

/// How a target resolves to the cell that actually receives the mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// The addressed cell is the landing cell.
    Direct,
    /// The addressed column is scanned bottom-up for the first empty row.
    Gravity,
}

impl Variant {
    /// Number of rows on the board.
    pub fn rows(self) -> usize {
        match self {
            Variant::TicTacToe => 3,
            Variant::ConnectFour => 6,
        }
    }

    /// Number of columns on the board.
    pub fn columns(self) -> usize {
        match self {
            Variant::TicTacToe => 3,
            Variant::ConnectFour => 7,
        }
    }

    /// Total number of cells, which is also the move count at which a full
    /// board is declared a draw.
    pub fn cell_count(self) -> usize {
        self.rows() * self.columns()
    }

    /// Consecutive same-player cells along one line needed to win.
    pub fn run_length(self) -> usize {
        match self {
            Variant::TicTacToe => 3,
            Variant::ConnectFour => 4,
        }
    }

    /// Placement rule for this variant.
    pub fn placement(self) -> Placement {
        match self {
            Variant::TicTacToe => Placement::Direct,
            Variant::ConnectFour => Placement::Gravity,
        }
    }

    /// Player who moves first on a fresh board.
    pub fn starting_player(self) -> Player {
        Player::First
    }

    /// The mark a player leaves on this variant's board.
    pub fn symbol(self, player: Player) -> &'static str {
        match (self, player) {
            (Variant::TicTacToe, Player::First) => "X",
            (Variant::TicTacToe, Player::Second) => "O",
            (Variant::ConnectFour, Player::First) => "🔴",
            (Variant::ConnectFour, Player::Second) => "🟡",
        }
    }

    /// Human-readable game name.
    pub fn title(self) -> &'static str {
        match self {
            Variant::TicTacToe => "Tic Tac Toe",
            Variant::ConnectFour => "Connect Four",
        }
    }
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first (X, red).
    First,
    /// Moves second (O, yellow).
    Second,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

/// A single cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    Empty,
    /// Holds a player's mark.
    Occupied(Player),
}

/// Zero-based cell address. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub column: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Letter-and-digit label (`A1` is the top-left cell, `B2` the one
    /// diagonally below it).
    pub fn label(&self) -> String {
        let letter = char::from(b'A' + (self.column % 26) as u8);
        format!("{}{}", letter, self.row + 1)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Row-major grid of squares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<Square>>,
}

impl Grid {
    /// Creates an empty grid of the given dimensions.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows: vec![vec![Square::Empty; columns]; rows],
        }
    }

    /// Creates an empty grid sized for a variant.
    pub fn for_variant(variant: Variant) -> Self {
        Self::new(variant.rows(), variant.columns())
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (taken from the first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns true when every row has the same width and the grid matches the
    /// variant's dimensions.
    pub fn fits(&self, variant: Variant) -> bool {
        self.rows.len() == variant.rows() && self.rows.iter().all(|row| row.len() == variant.columns())
    }

    /// Gets the square at a coordinate, `None` when out of bounds.
    pub fn get(&self, at: Coord) -> Option<Square> {
        self.rows.get(at.row).and_then(|row| row.get(at.column)).copied()
    }

    /// Gets the square at signed offsets, `None` when off the board.
    pub fn get_signed(&self, row: isize, column: isize) -> Option<Square> {
        if row < 0 || column < 0 {
            return None;
        }
        self.get(Coord::new(row as usize, column as usize))
    }

    /// Checks if a square is empty. Out-of-bounds squares are not empty.
    pub fn is_empty(&self, at: Coord) -> bool {
        matches!(self.get(at), Some(Square::Empty))
    }

    /// Sets the square at a coordinate.
    pub(crate) fn set(&mut self, at: Coord, square: Square) -> Result<(), &'static str> {
        let cell = self
            .rows
            .get_mut(at.row)
            .and_then(|row| row.get_mut(at.column))
            .ok_or("Coordinate out of bounds")?;
        *cell = square;
        Ok(())
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> &[Vec<Square>] {
        &self.rows
    }

    /// Every square with its coordinate, row-major.
    pub fn squares(&self) -> impl Iterator<Item = (Coord, Square)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, square)| (Coord::new(r, c), *square))
        })
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares().filter(|(_, s)| *s != Square::Empty).count()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Board filled with no winner.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// One accepted placement, appended to the snapshot history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Player who moved.
    pub player: Player,
    /// Landing cell.
    pub cell: Coord,
    /// 1-based move number.
    pub move_number: u32,
    /// Free-text identity of whoever issued the move, when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Complete persisted state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Game variant.
    variant: Variant,
    /// The board.
    cells: Grid,
    /// Player to move next.
    turn: Player,
    /// Game status.
    status: GameStatus,
    /// Number of placements so far.
    move_count: u32,
    /// Accepted moves, oldest first.
    #[serde(default)]
    history: Vec<MoveRecord>,
}

impl BoardSnapshot {
    /// Creates the canonical fresh snapshot for a variant.
    #[instrument]
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            cells: Grid::for_variant(variant),
            turn: variant.starting_player(),
            status: GameStatus::InProgress,
            move_count: 0,
            history: Vec::new(),
        }
    }

    /// Returns the variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the board.
    pub fn cells(&self) -> &Grid {
        &self.cells
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the number of placements made.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Records a placement. Rules are enforced by the engine, not here.
    pub(crate) fn place(&mut self, at: Coord, author: Option<&str>) -> Result<(), &'static str> {
        let player = self.turn;
        self.cells.set(at, Square::Occupied(player))?;
        self.move_count += 1;
        self.history.push(MoveRecord {
            player,
            cell: at,
            move_number: self.move_count,
            author: author.map(str::to_owned),
        });
        Ok(())
    }

    pub(crate) fn cells_mut(&mut self) -> &mut Grid {
        &mut self.cells
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    pub(crate) fn pass_turn(&mut self) {
        self.turn = self.turn.opponent();
    }
}
