use prime_counter::prime::PrimeVerdict;
use prime_counter::ui::mvi::Reducer;
use prime_counter::ui::prime::{PrimeDialogState, PrimeIntent, PrimeReducer};

fn open(count: i64) -> PrimeDialogState {
    PrimeReducer::reduce(PrimeDialogState::Hidden, PrimeIntent::Open { count })
}

#[test]
fn open_shows_verdict_for_snapshot() {
    let state = open(7);
    assert!(state.is_visible());
    assert_eq!(
        state.verdict(),
        Some(PrimeVerdict {
            value: 7,
            prime: true
        })
    );
}

#[test]
fn open_composite() {
    let verdict = open(100).verdict().expect("visible");
    assert!(!verdict.prime);
    assert_eq!(verdict.to_string(), "100 is not prime :(");
}

#[test]
fn open_non_positive() {
    for count in [-1, 0, 1] {
        let verdict = open(count).verdict().expect("visible");
        assert!(!verdict.prime, "{count} should not be prime");
    }
}

#[test]
fn reopening_while_visible_keeps_first_snapshot() {
    let state = open(5);
    let state = PrimeReducer::reduce(state, PrimeIntent::Open { count: 6 });
    assert_eq!(state.verdict().map(|v| v.value), Some(5));
}

#[test]
fn close_hides_dialog() {
    let state = PrimeReducer::reduce(open(2), PrimeIntent::Close);
    assert!(!state.is_visible());
    assert_eq!(state.verdict(), None);
}

#[test]
fn close_when_hidden_is_noop() {
    let state = PrimeReducer::reduce(PrimeDialogState::Hidden, PrimeIntent::Close);
    assert_eq!(state, PrimeDialogState::Hidden);
}

#[test]
fn same_snapshot_same_result() {
    let first = open(97);
    let closed = PrimeReducer::reduce(first, PrimeIntent::Close);
    let second = PrimeReducer::reduce(closed, PrimeIntent::Open { count: 97 });
    assert_eq!(first, second);
}
