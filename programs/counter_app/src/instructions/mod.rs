pub mod initialize;
pub mod update_counter;
pub mod increment;
pub mod decrement;
pub mod reset;

pub use initialize::*;
pub use update_counter::*;
pub use increment::*;
pub use decrement::*;
pub use reset::*;
