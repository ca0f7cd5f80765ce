use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{create_pda_account, ensure_unallocated, verify_counter_address};

/**
 * Account context for creating a counter
 *
 * The counter is taken unchecked so that a wrong address or an already
 * initialized account is reported as `AddressMismatch` / `AlreadyInitialized`
 * instead of a generic constraint failure.
 *
 * Access Control: the user signs and becomes the immutable owner
 */
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The counter account (PDA) to create
    /// - Derived from: ["counter", user]
    /// CHECK: Address and emptiness are verified in the handler before allocation
    #[account(mut)]
    pub counter: UncheckedAccount<'info>,

    /// The owner of the new counter
    /// - Pays for the account's rent-exempt balance
    #[account(mut)]
    pub user: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Creates the caller's counter with count = 0
 *
 * Validation Process:
 * 1. Counter address must equal the PDA of ["counter", user]
 * 2. Counter address must not already hold an account
 * 3. Allocate Counter::LEN bytes funded to rent exemption, owned by this program
 * 4. Write the discriminator, owner and zero count
 */
pub fn handle_initialize(ctx: Context<Initialize>) -> Result<()> {
    let owner = ctx.accounts.user.key();
    let counter_info = ctx.accounts.counter.to_account_info();

    // ===== VALIDATION PHASE =====

    let bump = verify_counter_address(counter_info.key, &owner)?;
    ensure_unallocated(counter_info.owner, counter_info.data_len())?;

    // ===== ALLOCATION PHASE =====

    let seeds = &[COUNTER_SEED.as_bytes(), owner.as_ref(), &[bump]];
    let signer = &[&seeds[..]];

    create_pda_account(
        ctx.accounts.user.to_account_info(),
        counter_info.clone(),
        ctx.accounts.system_program.to_account_info(),
        Counter::LEN,
        signer,
    )?;

    // ===== EFFECTS PHASE =====

    let counter = Counter::new(owner);
    {
        let mut data = counter_info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        counter.try_serialize(&mut writer)?;
    }

    emit!(CounterInitialized {
        counter: counter_info.key(),
        owner,
        count: counter.count,
    });
    msg!("Counter {} initialized for owner {}", counter_info.key(), owner);

    Ok(())
}
