pub mod account;
pub mod pda;
pub mod signer;

pub use account::*;
pub use pda::*;
pub use signer::*;
