//! Tic-tac-toe board, win evaluation, and move record.

#[cfg(test)]
mod tests;

use crate::Error;
use std::fmt;
use strum::Display;

/// Winning lines of the 3×3 board, in the order they are checked:
/// rows, columns, then both diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A mark placed on the board, either X or O.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Mark {
    /// The mark of the player who moves first.
    X,
    /// The mark of the player who moves second.
    O,
}

/// Returns the mark to play at the given step.
#[must_use]
pub fn turn_at(step: usize) -> Mark {
    if step % 2 == 0 { Mark::X } else { Mark::O }
}

/// A cell position on the board.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Coord {
    /// The row, counted from the top.
    pub row: usize,
    /// The column, counted from the left.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Formats as `(col, row)`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Dimensions of a board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct BoardSize {
    rows: usize,
    cols: usize,
}

impl BoardSize {
    /// The 3×3 board.
    pub const CLASSIC: Self = Self { rows: 3, cols: 3 };

    /// Creates a board size.
    ///
    /// # Errors
    ///
    /// Returns `Err` unless the size is 3×3, the only one the line table covers.
    pub fn new(rows: usize, cols: usize) -> Result<Self, Error> {
        let size = Self { rows, cols };
        if size != Self::CLASSIC {
            return Err(Error::UnsupportedBoardSize { rows, cols });
        }
        Ok(size)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(self) -> usize {
        self.cols
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    /// Tests if the coordinate lies on the board.
    #[must_use]
    pub fn contains(self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Maps a coordinate to its flat index, or `None` if off the board.
    #[must_use]
    pub fn index_of(self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.cols + coord.col)
    }

    /// Maps a flat index to its coordinate (undoes `index_of`).
    #[must_use]
    pub fn coord_of(self, index: usize) -> Option<Coord> {
        (index < self.cell_count()).then(|| Coord::new(index / self.cols, index % self.cols))
    }

    /// Returns the winning lines of the board, in checking order.
    #[must_use]
    pub fn lines(self) -> &'static [[usize; 3]] {
        if self == Self::CLASSIC { &LINES } else { &[] }
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// The result of evaluating a board.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Evaluation {
    /// The first completed line, if any.
    pub line: Option<[usize; 3]>,
    /// The mark on that line.
    pub winner: Option<Mark>,
}

impl Evaluation {
    /// Returns the flat indices of the winning line, empty if there is none.
    #[must_use]
    pub fn winning_line(&self) -> &[usize] {
        self.line.as_ref().map_or(&[], |line| &line[..])
    }

    /// Tests if the cell at `index` is on the winning line.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.winning_line().contains(&index)
    }
}

/// Searches `cells` for a line of three identical marks.
///
/// Lines are checked in a fixed order and the first completed one wins.
/// A slice whose length does not match `size` never has a winner.
#[must_use]
pub fn evaluate(cells: &[Option<Mark>], size: BoardSize) -> Evaluation {
    if cells.len() != size.cell_count() {
        return Evaluation::default();
    }

    for &line in size.lines() {
        let [a, b, c] = line;
        if let Some(mark) = cells[a]
            && cells[b] == Some(mark)
            && cells[c] == Some(mark)
        {
            return Evaluation {
                line: Some(line),
                winner: Some(mark),
            };
        }
    }
    Evaluation::default()
}

/// A board of cells, each empty or marked.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    size: BoardSize,
    cells: Box<[Option<Mark>]>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![None; size.cell_count()].into_boxed_slice(),
        }
    }

    /// Returns the size of the board.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns all cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Option<Mark>] {
        &self.cells
    }

    /// Returns the mark at the given flat index (if any).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// Tests if every cell is marked.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Evaluates the board for a winner.
    #[must_use]
    pub fn evaluate(&self) -> Evaluation {
        evaluate(&self.cells, self.size)
    }

    fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut board = self.clone();
        board.cells[index] = Some(mark);
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::CLASSIC)
    }
}

/// A board snapshot in history, with the move that produced it.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Entry {
    board: Board,
    coord: Option<Coord>,
}

impl Entry {
    /// Returns the board after the move.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the coordinate of the move, or `None` for the initial board.
    #[must_use]
    pub fn coord(&self) -> Option<Coord> {
        self.coord
    }
}

/// A tic-tac-toe game record.
///
/// History is a log of board snapshots with a cursor into it. The first
/// entry is always the empty board. Making a move behind the end of the
/// log discards the entries after the cursor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    entries: Vec<Entry>,
    index: usize,
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl Record {
    /// Creates an empty record on the 3×3 board.
    #[must_use]
    pub fn new() -> Self {
        Self::with_size(BoardSize::CLASSIC)
    }

    /// Creates an empty record on a board of the given size.
    #[must_use]
    pub fn with_size(size: BoardSize) -> Self {
        Self {
            entries: vec![Entry {
                board: Board::new(size),
                coord: None,
            }],
            index: 0,
        }
    }

    /// Clears the record.
    pub fn clear(&mut self) {
        self.entries.truncate(1);
        self.index = 0;
    }

    /// Returns the size of the board.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.entries[0].board.size
    }

    /// Returns a slice of all entries, in the past or in the future.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the current step, the index of the displayed entry.
    #[must_use]
    pub fn step(&self) -> usize {
        self.index
    }

    /// Returns the displayed entry.
    #[must_use]
    pub fn current(&self) -> &Entry {
        &self.entries[self.index]
    }

    /// Returns the displayed board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.current().board
    }

    /// Tests if there is any move in the past.
    #[must_use]
    pub fn has_past(&self) -> bool {
        self.index > 0
    }

    /// Tests if there is any move in the future.
    #[must_use]
    pub fn has_future(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Evaluates the displayed board.
    #[must_use]
    pub fn evaluate(&self) -> Evaluation {
        self.board().evaluate()
    }

    /// Returns the winner on the displayed board (if any).
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        self.evaluate().winner
    }

    /// Tests if the game is ended, by a win or a full board.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.winner().is_some() || self.board().is_full()
    }

    /// Returns the current mark to play, or `None` if the game is ended.
    #[must_use]
    pub fn turn(&self) -> Option<Mark> {
        (!self.is_ended()).then(|| turn_at(self.index))
    }

    /// Places the current mark at `coord`, clearing moves in the future.
    ///
    /// # Errors
    ///
    /// Returns `Err` and leaves the record untouched if `coord` is off the
    /// board, the game is ended, or the cell is occupied.
    pub fn make_move(&mut self, coord: Coord) -> Result<(), Error> {
        let Some(index) = self.size().index_of(coord) else {
            return Err(Error::OutOfBounds {
                row: coord.row,
                col: coord.col,
            });
        };
        if self.is_ended() {
            return Err(Error::GameOver);
        }
        if self.board().get(index).is_some() {
            return Err(Error::Occupied { index });
        }

        let mark = turn_at(self.index);
        let board = self.board().with_mark(index, mark);

        self.entries.truncate(self.index + 1);
        self.entries.push(Entry {
            board,
            coord: Some(coord),
        });
        self.index += 1;
        Ok(())
    }

    /// Undoes the previous move (if any), returning the entry undone.
    pub fn undo_move(&mut self) -> Option<&Entry> {
        if !self.has_past() {
            return None;
        }
        self.index -= 1;
        Some(&self.entries[self.index + 1])
    }

    /// Redoes the next move (if any), returning the entry redone.
    pub fn redo_move(&mut self) -> Option<&Entry> {
        if !self.has_future() {
            return None;
        }
        self.index += 1;
        Some(&self.entries[self.index])
    }

    /// Jumps to the given step without altering history.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `step` is past the end of history.
    pub fn jump(&mut self, step: usize) -> Result<(), Error> {
        let len = self.entries.len();
        if step >= len {
            return Err(Error::StepOutOfRange { step, len });
        }
        self.index = step;
        Ok(())
    }

    /// Jumps to the last entry in history.
    pub fn jump_to_end(&mut self) {
        // `entries` always holds the initial entry.
        self.index = self.entries.len() - 1;
    }
}
