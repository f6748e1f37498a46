use crate::prime::PrimeVerdict;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimeDialogState {
    #[default]
    Hidden,
    Visible { verdict: PrimeVerdict },
}

impl UiState for PrimeDialogState {}

impl PrimeDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn verdict(&self) -> Option<PrimeVerdict> {
        match self {
            Self::Visible { verdict } => Some(*verdict),
            Self::Hidden => None,
        }
    }
}
