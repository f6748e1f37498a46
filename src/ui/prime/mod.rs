//! The "Is this prime?" dialog.
//!
//! The dialog never holds a reference to the counter store. `Open`
//! carries the count by value and the verdict is computed once, so later
//! increments leave an open dialog unchanged.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_prime_dialog;
pub use intent::PrimeIntent;
pub use reducer::PrimeReducer;
pub use state::PrimeDialogState;
