//! Observable counter state.
//!
//! [`CounterStore`] owns the count and is the only place it can change.
//! Every mutation ends with an explicit notification pass over the
//! registered observers.

mod store;

pub use store::{ChangeKind, CounterChange, CounterStore, SubscriptionId};
