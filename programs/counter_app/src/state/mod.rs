pub mod counter_state;

pub use counter_state::*;
