use anchor_lang::prelude::*;

use crate::constants::COUNTER_SEED;
use crate::error::CounterError;

/// Seeds of the counter PDA for `owner`, without the bump.
pub fn counter_seeds(owner: &Pubkey) -> [&[u8]; 2] {
    [COUNTER_SEED.as_bytes(), owner.as_ref()]
}

/// Canonical counter address and bump for `owner`.
///
/// Fails with `AddressDerivationFailed` in the vanishingly rare case that no
/// bump yields an off-curve address.
pub fn try_find_counter_address(owner: &Pubkey) -> Result<(Pubkey, u8)> {
    let found = Pubkey::try_find_program_address(&counter_seeds(owner), &crate::ID)
        .ok_or(CounterError::AddressDerivationFailed)?;
    Ok(found)
}

/// Checks that `address` is the counter PDA of `owner` and returns its bump.
pub fn verify_counter_address(address: &Pubkey, owner: &Pubkey) -> Result<u8> {
    let (expected, bump) = try_find_counter_address(owner)?;
    require_keys_eq!(*address, expected, CounterError::AddressMismatch);
    Ok(bump)
}
