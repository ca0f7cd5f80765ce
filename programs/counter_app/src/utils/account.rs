use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};

use crate::error::CounterError;

/// Rejects an address that already holds program state.
///
/// A fresh PDA is owned by the System Program and carries no data; it may
/// still hold lamports if someone transferred to it ahead of time.
pub fn ensure_unallocated(owner_program: &Pubkey, data_len: usize) -> Result<()> {
    require!(
        *owner_program == anchor_lang::system_program::ID && data_len == 0,
        CounterError::AlreadyInitialized
    );
    Ok(())
}

/// Lamports the payer must add so an account of `space` bytes is rent exempt.
pub fn lamports_to_fund(rent: &Rent, space: usize, current_lamports: u64) -> u64 {
    rent.minimum_balance(space).saturating_sub(current_lamports)
}

/// Creates a program-owned PDA of `space` bytes funded to rent exemption
pub fn create_pda_account<'a>(
    payer: AccountInfo<'a>,
    new_account: AccountInfo<'a>,
    system_program: AccountInfo<'a>,
    space: usize,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let rent = Rent::get()?;
    let current_lamports = new_account.lamports();

    if current_lamports == 0 {
        return create_account(
            CpiContext::new_with_signer(
                system_program,
                CreateAccount {
                    from: payer,
                    to: new_account,
                },
                signer_seeds,
            ),
            rent.minimum_balance(space),
            space as u64,
            &crate::ID,
        );
    }

    // Pre-funded address: create_account would fail, so top up and
    // allocate/assign separately.
    let top_up = lamports_to_fund(&rent, space, current_lamports);
    if top_up > 0 {
        transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer,
                    to: new_account.clone(),
                },
            ),
            top_up,
        )?;
    }

    allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: new_account.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;

    assign(
        CpiContext::new_with_signer(
            system_program,
            Assign {
                account_to_assign: new_account,
            },
            signer_seeds,
        ),
        &crate::ID,
    )
}
