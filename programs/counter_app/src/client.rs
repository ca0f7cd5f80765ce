//! Instruction builders for off-chain callers.
//!
//! Callers derive the counter address with [`counter_address`] and pass it in
//! explicitly; the program verifies it, so a wrong address fails on-chain
//! rather than being silently corrected here.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::InstructionData;

use crate::utils::try_find_counter_address;

/// Address of the counter owned by `owner`.
///
/// Fails with `AddressDerivationFailed` when no off-curve address exists for
/// `owner`; that is permanent for the identity and must not be retried.
pub fn counter_address(owner: &Pubkey) -> Result<Pubkey> {
    let (address, _bump) = try_find_counter_address(owner)?;
    Ok(address)
}

/// `user` signs, pays for the account and becomes its owner.
pub fn initialize(counter: &Pubkey, user: &Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: crate::accounts::Initialize {
            counter: *counter,
            user: *user,
            system_program: anchor_lang::system_program::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::Initialize {}.data(),
    }
}

pub fn increment(counter: &Pubkey, owner: &Pubkey) -> Instruction {
    update_counter(counter, owner, crate::instruction::Increment {}.data())
}

pub fn decrement(counter: &Pubkey, owner: &Pubkey) -> Instruction {
    update_counter(counter, owner, crate::instruction::Decrement {}.data())
}

pub fn reset(counter: &Pubkey, owner: &Pubkey) -> Instruction {
    update_counter(counter, owner, crate::instruction::Reset {}.data())
}

fn update_counter(counter: &Pubkey, owner: &Pubkey, data: Vec<u8>) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: crate::accounts::UpdateCounter {
            counter: *counter,
            owner: *owner,
        }
        .to_account_metas(None),
        data,
    }
}
