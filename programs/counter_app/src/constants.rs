use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Seeds used for PDA derivation. Exposed through `#[constant]` so clients
 * reading the IDL derive the same addresses the program verifies.
 */

/// Seed for counter PDA derivation
/// - Used in: ["counter", owner]
/// - One counter account per owning identity
#[constant]
pub const COUNTER_SEED: &str = "counter";
