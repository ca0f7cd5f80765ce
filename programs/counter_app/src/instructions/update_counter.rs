use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

/**
 * Account context shared by increment, decrement and reset
 *
 * The signer is compared with the stored owner inside the state transition
 * (see `Counter::authorize`), not here, so a mismatch always surfaces as
 * `Unauthorized`.
 */
#[derive(Accounts)]
pub struct UpdateCounter<'info> {
    /// The counter to mutate
    /// - Must be an initialized Counter owned by this program
    /// - Derived from: ["counter", counter.owner]
    #[account(
        mut,
        seeds = [COUNTER_SEED.as_bytes(), counter.owner.as_ref()],
        bump
    )]
    pub counter: Account<'info, Counter>,

    /// The identity signing the update
    pub owner: Signer<'info>,
}
