use crate::counter::{CounterChange, CounterStore, SubscriptionId};
use crate::ui::counter::{Control, CounterViewIntent, CounterViewReducer, CounterViewState};
use crate::ui::mvi::Reducer;
use crate::ui::prime::{PrimeDialogState, PrimeIntent, PrimeReducer};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Menu,
    Counter,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Menu => crate::ui::header::ROOT_TITLE,
            Screen::Counter => "Counter demo",
        }
    }
}

/// Entries of the root menu, in display order.
pub const MENU_ENTRIES: &[Screen] = &[Screen::Counter];

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    menu_selection: usize,
    /// Source of truth for the count. Views read it, never copy it,
    /// except the prime dialog which receives a snapshot.
    store: CounterStore,
    /// Set by the store observer and by UI state changes; cleared by the
    /// render loop.
    needs_redraw: Rc<Cell<bool>>,
    view_subscription: SubscriptionId,
    counter_view: CounterViewState,
    prime_dialog: PrimeDialogState,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let mut store = CounterStore::new();
        let needs_redraw = Rc::new(Cell::new(true));
        let flag = Rc::clone(&needs_redraw);
        let view_subscription = store.subscribe(move |change: &CounterChange| {
            tracing::debug!(
                kind = ?change.kind,
                count = change.current,
                "counter view invalidated"
            );
            flag.set(true);
        });

        Self {
            should_quit: false,
            screen: Screen::Menu,
            menu_selection: 0,
            store,
            needs_redraw,
            view_subscription,
            counter_view: CounterViewState::default(),
            prime_dialog: PrimeDialogState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        tracing::info!(count = self.store.current_value(), "quit requested");
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn menu_selection(&self) -> usize {
        self.menu_selection
    }

    pub fn count(&self) -> i64 {
        self.store.current_value()
    }

    /// For registering extra observers.
    pub fn store_mut(&mut self) -> &mut CounterStore {
        &mut self.store
    }

    /// Subscription that keeps the counter view in sync with the store.
    pub fn view_subscription(&self) -> SubscriptionId {
        self.view_subscription
    }

    pub fn counter_view(&self) -> &CounterViewState {
        &self.counter_view
    }

    pub fn prime_dialog(&self) -> &PrimeDialogState {
        &self.prime_dialog
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }

    pub fn invalidate(&self) {
        self.needs_redraw.set(true);
    }

    // The store observer schedules the redraw for both mutations.
    pub fn increment(&mut self) {
        self.store.increment();
    }

    pub fn decrement(&mut self) {
        self.store.decrement();
    }

    pub fn open_selected(&mut self) {
        if let Some(&screen) = MENU_ENTRIES.get(self.menu_selection) {
            self.open_screen(screen);
        }
    }

    pub fn open_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::debug!(from = ?self.screen, to = ?screen, "navigate");
            self.screen = screen;
            self.invalidate();
        }
    }

    pub fn move_menu_selection(&mut self, delta: isize) {
        let len = MENU_ENTRIES.len() as isize;
        let next = (self.menu_selection as isize + delta).rem_euclid(len);
        self.menu_selection = next as usize;
        self.invalidate();
    }

    /// Hands the current count to the dialog by value.
    pub fn open_prime_dialog(&mut self) {
        let count = self.store.current_value();
        self.dispatch_prime(PrimeIntent::Open { count });
        if let Some(verdict) = self.prime_dialog.verdict() {
            tracing::info!(snapshot = verdict.value, prime = verdict.prime, "prime dialog opened");
        }
    }

    pub fn close_prime_dialog(&mut self) {
        self.dispatch_prime(PrimeIntent::Close);
    }

    pub fn focus_next(&mut self) {
        self.dispatch_counter_view(CounterViewIntent::FocusNext);
    }

    pub fn focus_prev(&mut self) {
        self.dispatch_counter_view(CounterViewIntent::FocusPrev);
    }

    /// Presses the focused control on the counter screen.
    pub fn activate_focused(&mut self) {
        match self.counter_view.focused {
            Control::Decrement => self.decrement(),
            Control::Increment => self.increment(),
            Control::IsPrime => self.open_prime_dialog(),
        }
    }

    /// Esc: close the dialog, else leave the counter screen, else quit.
    pub fn back(&mut self) {
        if self.prime_dialog.is_visible() {
            self.close_prime_dialog();
        } else if self.screen == Screen::Counter {
            self.open_screen(Screen::Menu);
        } else {
            self.request_quit();
        }
    }

    fn dispatch_prime(&mut self, intent: PrimeIntent) {
        dispatch_mvi!(self, prime_dialog, PrimeReducer, intent);
        self.invalidate();
    }

    fn dispatch_counter_view(&mut self, intent: CounterViewIntent) {
        dispatch_mvi!(self, counter_view, CounterViewReducer, intent);
        self.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_menu_with_pending_redraw() {
        let app = App::new();
        assert_eq!(app.screen(), Screen::Menu);
        assert_eq!(app.count(), 0);
        assert!(app.take_redraw());
        assert!(!app.take_redraw());
    }

    #[test]
    fn mutation_schedules_redraw_through_observer() {
        let mut app = App::new();
        app.take_redraw();
        app.increment();
        assert!(app.take_redraw());

        let id = app.view_subscription();
        assert!(app.store_mut().unsubscribe(id));
        app.decrement();
        assert!(!app.take_redraw());
    }

    #[test]
    fn back_unwinds_dialog_then_screen_then_quits() {
        let mut app = App::new();
        app.open_selected();
        app.open_prime_dialog();

        app.back();
        assert!(!app.prime_dialog().is_visible());
        assert_eq!(app.screen(), Screen::Counter);

        app.back();
        assert_eq!(app.screen(), Screen::Menu);
        assert!(!app.should_quit());

        app.back();
        assert!(app.should_quit());
    }

    #[test]
    fn menu_selection_wraps() {
        let mut app = App::new();
        app.move_menu_selection(1);
        assert_eq!(app.menu_selection(), 0);
        app.move_menu_selection(-1);
        assert_eq!(app.menu_selection(), 0);
    }
}
