use anchor_lang::prelude::*;

use crate::error::CounterError;
use crate::utils::VerifiedSigner;

/**
 * Counter state account
 *
 * Holds the single signed counter owned by one identity.
 *
 * Derivation: ["counter", owner]
 *
 * Layout (48 bytes):
 * - [0..8]   account discriminator
 * - [8..40]  owner
 * - [40..48] count, little-endian i64
 *
 * Lifecycle:
 * 1. Created by initialize with count = 0
 * 2. Mutated in place by increment, decrement and reset
 * 3. Never closed
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Counter {
    /// Identity allowed to mutate this counter
    /// - Set once at initialization and never changed
    pub owner: Pubkey,

    /// Current value
    /// - Only moves by +1, -1 or back to 0
    pub count: i64,
}

impl Counter {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Counter>();

    pub fn new(owner: Pubkey) -> Self {
        Self { owner, count: 0 }
    }

    /// Decodes raw account data fetched for a counter address.
    ///
    /// Returns `Ok(None)` when the address holds no data, so callers can tell an
    /// uninitialized counter apart from a counter at zero. Non-empty data must
    /// carry the `Counter` discriminator.
    pub fn from_account_data(data: &[u8]) -> Result<Option<Self>> {
        if data.is_empty() {
            return Ok(None);
        }
        let counter = Self::try_deserialize(&mut &data[..])?;
        Ok(Some(counter))
    }

    /// Fails with `Unauthorized` unless `signer` is the stored owner.
    pub fn authorize(&self, signer: &VerifiedSigner) -> Result<()> {
        require_keys_eq!(self.owner, signer.key(), CounterError::Unauthorized);
        Ok(())
    }

    pub fn increment(&mut self, signer: &VerifiedSigner) -> Result<i64> {
        self.authorize(signer)?;
        self.count = self.count.checked_add(1).ok_or(CounterError::Overflow)?;
        Ok(self.count)
    }

    /// Strict lower bound: below `i64::MIN` is an error, never a clamp or a wrap.
    pub fn decrement(&mut self, signer: &VerifiedSigner) -> Result<i64> {
        self.authorize(signer)?;
        self.count = self.count.checked_sub(1).ok_or(CounterError::Underflow)?;
        Ok(self.count)
    }

    pub fn reset(&mut self, signer: &VerifiedSigner) -> Result<i64> {
        self.authorize(signer)?;
        self.count = 0;
        Ok(self.count)
    }
}
