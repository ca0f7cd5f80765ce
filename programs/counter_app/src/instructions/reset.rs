use anchor_lang::prelude::*;
use crate::event::*;
use crate::utils::VerifiedSigner;
use super::UpdateCounter;

pub fn handle_reset(ctx: Context<UpdateCounter>) -> Result<()> {
    let signer = VerifiedSigner::from(&ctx.accounts.owner);
    let counter = &mut ctx.accounts.counter;
    let previous_count = counter.count;

    counter.reset(&signer)?;

    emit!(CounterReset {
        counter: counter.key(),
        owner: signer.key(),
        previous_count,
    });
    msg!("Counter reset! Previous: {}", previous_count);

    Ok(())
}
