//! Typed result of every prompt-driven operation.

/// Outcome of a selection attempt.
///
/// `Cancelled` is produced only when the user interrupts a prompt or input
/// ends; invalid answers are re-prompted and never surface here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome<T> {
    Selected(T),
    Cancelled,
}

impl<T> SelectionOutcome<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SelectionOutcome::Cancelled)
    }

    pub fn selected(self) -> Option<T> {
        match self {
            SelectionOutcome::Selected(value) => Some(value),
            SelectionOutcome::Cancelled => None,
        }
    }
}
