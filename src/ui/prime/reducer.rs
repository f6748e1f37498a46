use crate::prime::PrimeVerdict;
use crate::ui::mvi::Reducer;
use crate::ui::prime::intent::PrimeIntent;
use crate::ui::prime::state::PrimeDialogState;

pub struct PrimeReducer;

impl Reducer for PrimeReducer {
    type State = PrimeDialogState;
    type Intent = PrimeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PrimeIntent::Open { count } => match state {
                // Already showing: keep the verdict from the first snapshot
                visible @ PrimeDialogState::Visible { .. } => visible,
                PrimeDialogState::Hidden => PrimeDialogState::Visible {
                    verdict: PrimeVerdict::judge(count),
                },
            },
            PrimeIntent::Close => PrimeDialogState::Hidden,
        }
    }
}
