use std::fmt;

/// Handle returned by [`CounterStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Increment,
    Decrement,
}

/// What observers receive after each mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterChange {
    pub previous: i64,
    pub current: i64,
    pub kind: ChangeKind,
}

type Observer = Box<dyn FnMut(&CounterChange)>;

/// Integer counter with synchronous observers.
///
/// Starts at zero and has no floor. Observers run on the caller's thread,
/// in subscription order, before `increment`/`decrement` return.
pub struct CounterStore {
    count: i64,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CounterStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterStore")
            .field("count", &self.count)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl CounterStore {
    pub fn new() -> Self {
        Self {
            count: 0,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn current_value(&self) -> i64 {
        self.count
    }

    pub fn increment(&mut self) {
        let previous = self.count;
        self.count = previous.saturating_add(1);
        self.notify(CounterChange {
            previous,
            current: self.count,
            kind: ChangeKind::Increment,
        });
    }

    /// Negative counts are allowed.
    pub fn decrement(&mut self) {
        let previous = self.count;
        self.count = previous.saturating_sub(1);
        self.notify(CounterChange {
            previous,
            current: self.count,
            kind: ChangeKind::Decrement,
        });
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&CounterChange) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&mut self, change: CounterChange) {
        tracing::trace!(
            previous = change.previous,
            current = change.current,
            observers = self.observers.len(),
            "counter changed"
        );
        for (_, observer) in self.observers.iter_mut() {
            observer(&change);
        }
    }
}
