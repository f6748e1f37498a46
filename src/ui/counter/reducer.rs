use crate::ui::counter::intent::CounterViewIntent;
use crate::ui::counter::state::CounterViewState;
use crate::ui::mvi::Reducer;

pub struct CounterViewReducer;

impl Reducer for CounterViewReducer {
    type State = CounterViewState;
    type Intent = CounterViewIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterViewIntent::FocusNext => CounterViewState {
                focused: state.focused.next(),
            },
            CounterViewIntent::FocusPrev => CounterViewState {
                focused: state.focused.prev(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::counter::state::Control;

    #[test]
    fn focus_starts_on_increment() {
        assert_eq!(CounterViewState::default().focused, Control::Increment);
    }

    #[test]
    fn focus_next_wraps() {
        let state = CounterViewState {
            focused: Control::IsPrime,
        };
        let state = CounterViewReducer::reduce(state, CounterViewIntent::FocusNext);
        assert_eq!(state.focused, Control::Decrement);
    }

    #[test]
    fn focus_prev_wraps() {
        let state = CounterViewState {
            focused: Control::Decrement,
        };
        let state = CounterViewReducer::reduce(state, CounterViewIntent::FocusPrev);
        assert_eq!(state.focused, Control::IsPrime);
    }
}
