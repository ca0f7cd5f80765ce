use anchor_lang::prelude::*;

#[error_code]
pub enum CounterError {
    // Address derivation errors
    #[msg("Counter address does not match the derivation of [\"counter\", owner]")]
    AddressMismatch,
    #[msg("No off-curve counter address exists for this owner")]
    AddressDerivationFailed,

    // Lifecycle errors
    #[msg("Counter account is already initialized")]
    AlreadyInitialized,

    // Access control errors
    #[msg("Only the counter owner can perform this action")]
    Unauthorized,

    // Arithmetic errors
    #[msg("Counter would exceed its maximum value")]
    Overflow,
    #[msg("Counter would go below its minimum value")]
    Underflow,
}
