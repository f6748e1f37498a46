use crate::ui::mvi::UiState;

/// Activatable controls on the counter screen, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    Decrement,
    #[default]
    Increment,
    IsPrime,
}

impl Control {
    pub const ALL: [Control; 3] = [Control::Decrement, Control::Increment, Control::IsPrime];

    pub fn label(self) -> &'static str {
        match self {
            Control::Decrement => "[ - ]",
            Control::Increment => "[ + ]",
            Control::IsPrime => "[ Is this prime? ]",
        }
    }

    fn index(self) -> usize {
        match self {
            Control::Decrement => 0,
            Control::Increment => 1,
            Control::IsPrime => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterViewState {
    pub focused: Control,
}

impl UiState for CounterViewState {}
