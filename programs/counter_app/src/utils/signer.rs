use anchor_lang::prelude::*;

/**
 * Identity whose signature has been verified for the current instruction
 *
 * The only public way to obtain one is from an Anchor `Signer`, which the
 * runtime has already checked. State transitions take this token instead of a
 * bare `Pubkey` so that "account was passed in" can never stand in for
 * "owner signed".
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifiedSigner(Pubkey);

impl VerifiedSigner {
    pub fn key(&self) -> Pubkey {
        self.0
    }

    /// Trusts that `key` signed, for exercising state transitions without a runtime.
    #[cfg(test)]
    pub(crate) fn assume_signed(key: Pubkey) -> Self {
        Self(key)
    }
}

impl<'info> From<&Signer<'info>> for VerifiedSigner {
    fn from(signer: &Signer<'info>) -> Self {
        Self(signer.key())
    }
}
