use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimeIntent {
    /// Snapshot of the count taken when the user asked.
    Open { count: i64 },
    Close,
}

impl Intent for PrimeIntent {}
