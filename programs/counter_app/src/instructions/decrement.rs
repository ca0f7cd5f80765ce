use anchor_lang::prelude::*;
use crate::event::*;
use crate::utils::VerifiedSigner;
use super::UpdateCounter;

/**
 * Subtracts one from the counter
 *
 * Negative counts are valid. Only the bottom of the i64 range is a boundary,
 * and crossing it fails with `Underflow` instead of clamping or wrapping.
 */
pub fn handle_decrement(ctx: Context<UpdateCounter>) -> Result<()> {
    let signer = VerifiedSigner::from(&ctx.accounts.owner);
    let counter = &mut ctx.accounts.counter;
    let previous_count = counter.count;

    let new_count = counter.decrement(&signer)?;

    emit!(CounterDecremented {
        counter: counter.key(),
        owner: signer.key(),
        previous_count,
        new_count,
    });
    msg!("Counter decremented! Previous: {}, New: {}", previous_count, new_count);

    Ok(())
}
