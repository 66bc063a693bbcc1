//! Game session: a record plus how its history is presented.

use crate::{
    Error,
    game::{Coord, Entry, Evaluation, Mark, Record, turn_at},
};
use std::fmt;
use strum::Display;

/// Display order of the move list.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
pub enum HistoryOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl HistoryOrder {
    /// Returns the other order.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Status of the displayed board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Status {
    /// The game goes on with the given mark to play.
    InProgress(Mark),
    /// The given mark completed a line.
    Won(Mark),
    /// The board is full with no line completed.
    Draw,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress(mark) => write!(f, "Next player: {mark}"),
            Self::Won(mark) => write!(f, "Winner: {mark}"),
            Self::Draw => f.write_str("Draw"),
        }
    }
}

/// An item of the move list.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MoveListItem {
    /// The step to jump to.
    pub step: usize,
    /// The text shown on the item.
    pub label: String,
    /// Whether the step is the displayed one.
    pub current: bool,
}

fn label(step: usize, entry: &Entry) -> String {
    match entry.coord() {
        Some(coord) if step > 0 => format!("Go to move #{step} {coord}"),
        _ => "Go to game start".into(),
    }
}

/// A game being played, owning all mutable state.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Session {
    record: Record,
    order: HistoryOrder,
}

impl Session {
    /// Creates a session on an empty 3×3 board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record.
    #[must_use]
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Returns the move list order.
    #[must_use]
    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    /// Evaluates the displayed board.
    #[must_use]
    pub fn evaluation(&self) -> Evaluation {
        self.record.evaluate()
    }

    /// Returns the status of the displayed board.
    #[must_use]
    pub fn status(&self) -> Status {
        if let Some(mark) = self.record.winner() {
            Status::Won(mark)
        } else if self.record.board().is_full() {
            Status::Draw
        } else {
            Status::InProgress(turn_at(self.record.step()))
        }
    }

    /// Handles an activation of the cell at flat `index` and `coord`.
    ///
    /// # Errors
    ///
    /// Returns `Err` and leaves the session untouched if `index` does not
    /// match `coord` or the move is rejected by [`Record::make_move`].
    pub fn activate_cell(&mut self, index: usize, coord: Coord) -> Result<(), Error> {
        if self.record.size().index_of(coord) != Some(index) {
            return Err(Error::IndexMismatch {
                index,
                row: coord.row,
                col: coord.col,
            });
        }
        self.record.make_move(coord)
    }

    /// Jumps to the given step.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `step` is past the end of history.
    pub fn jump_to(&mut self, step: usize) -> Result<(), Error> {
        self.record.jump(step)
    }

    /// Steps back by one move, returning whether anything changed.
    pub fn undo(&mut self) -> bool {
        self.record.undo_move().is_some()
    }

    /// Steps forward by one move, returning whether anything changed.
    pub fn redo(&mut self) -> bool {
        self.record.redo_move().is_some()
    }

    /// Jumps to the last move in history.
    pub fn jump_to_end(&mut self) {
        self.record.jump_to_end();
    }

    /// Flips the move list order.
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggled();
    }

    /// Returns the move list in display order.
    #[must_use]
    pub fn move_list(&self) -> Vec<MoveListItem> {
        let current = self.record.step();
        let mut items: Vec<_> = self
            .record
            .entries()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveListItem {
                step,
                label: label(step, entry),
                current: step == current,
            })
            .collect();
        if self.order == HistoryOrder::Descending {
            items.reverse();
        }
        items
    }
}
