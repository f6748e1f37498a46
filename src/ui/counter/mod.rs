//! The "Counter demo" screen: `-`, the count, `+`, and "Is this prime?".

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::CounterViewIntent;
pub use reducer::CounterViewReducer;
pub use state::{Control, CounterViewState};
pub use view::render_counter_view;
