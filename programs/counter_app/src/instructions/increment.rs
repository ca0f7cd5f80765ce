use anchor_lang::prelude::*;
use crate::event::*;
use crate::utils::VerifiedSigner;
use super::UpdateCounter;

/// Adds one to the counter; fails with `Overflow` at `i64::MAX`.
pub fn handle_increment(ctx: Context<UpdateCounter>) -> Result<()> {
    let signer = VerifiedSigner::from(&ctx.accounts.owner);
    let counter = &mut ctx.accounts.counter;
    let previous_count = counter.count;

    let new_count = counter.increment(&signer)?;

    emit!(CounterIncremented {
        counter: counter.key(),
        owner: signer.key(),
        previous_count,
        new_count,
    });
    msg!("Counter incremented! Previous: {}, New: {}", previous_count, new_count);

    Ok(())
}
