/// An error returned when an action cannot be applied to a game.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// A move was attempted after the game ended.
    #[error("The game is over.")]
    GameOver,
    /// A move was attempted on an occupied cell.
    #[error("Cell {index} is occupied.")]
    Occupied {
        /// Flat index of the cell.
        index: usize,
    },
    /// A coordinate lies outside the board.
    #[error("Cell ({col}, {row}) is out of bounds.")]
    OutOfBounds {
        /// The row of the coordinate.
        row: usize,
        /// The column of the coordinate.
        col: usize,
    },
    /// A flat index disagrees with the coordinate it came with.
    #[error("Cell index {index} does not match ({col}, {row}).")]
    IndexMismatch {
        /// The flat index.
        index: usize,
        /// The row of the coordinate.
        row: usize,
        /// The column of the coordinate.
        col: usize,
    },
    /// A jump past the end of history.
    #[error("Step {step} is out of range for a history of {len}.")]
    StepOutOfRange {
        /// The requested step.
        step: usize,
        /// The number of entries in history.
        len: usize,
    },
    /// A board size other than 3×3.
    #[error("Board size {rows}×{cols} is not supported.")]
    UnsupportedBoardSize {
        /// The requested number of rows.
        rows: usize,
        /// The requested number of columns.
        cols: usize,
    },
}
