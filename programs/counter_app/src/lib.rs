use anchor_lang::prelude::*;

declare_id!("2CtNPDTHjvsPJZ9rX4R8EpVpU37FgL1G4UXCXqBeqStQ");

pub mod client;
pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Counter Program
 *
 * Keeps one signed 64-bit counter per owning identity in a program-derived account.
 *
 * Key Features:
 * - Deterministic counter address derived from ["counter", owner]
 * - At-most-once creation (re-initialization is rejected)
 * - Owner-only mutation with an explicit signer check
 * - Checked arithmetic in both directions (no wrapping, no clamping)
 *
 * Architecture:
 * - Counter PDA: stores the owner and the current count
 *
 * Workflow:
 * 1. Owner initializes their counter (count = 0)
 * 2. Owner increments, decrements or resets it
 * 3. Anyone can read it back by re-deriving the address
 */
#[program]
pub mod counter_app {
    use super::*;

    /**
     * Creates the caller's counter
     *
     * Allocates the PDA at ["counter", user], funds it to rent exemption and
     * writes owner = user, count = 0.
     *
     * @param ctx - Account context containing counter, user and system program
     *
     * Access Control: Any signer, for their own counter only
     */
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        handle_initialize(ctx)
    }

    /**
     * Increments the counter by one
     *
     * @param ctx - Account context containing counter and owner accounts
     *
     * Access Control: Owner only
     */
    pub fn increment(ctx: Context<UpdateCounter>) -> Result<()> {
        handle_increment(ctx)
    }

    /**
     * Decrements the counter by one
     *
     * @param ctx - Account context containing counter and owner accounts
     *
     * Access Control: Owner only
     */
    pub fn decrement(ctx: Context<UpdateCounter>) -> Result<()> {
        handle_decrement(ctx)
    }

    /**
     * Sets the counter back to zero
     *
     * @param ctx - Account context containing counter and owner accounts
     *
     * Access Control: Owner only
     */
    pub fn reset(ctx: Context<UpdateCounter>) -> Result<()> {
        handle_reset(ctx)
    }
}
