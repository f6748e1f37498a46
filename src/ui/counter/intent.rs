use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterViewIntent {
    FocusNext,
    FocusPrev,
}

impl Intent for CounterViewIntent {}
