use anchor_lang::prelude::*;

/// Event emitted when a counter account is created
#[event]
pub struct CounterInitialized {
    /// The counter account public key
    pub counter: Pubkey,
    /// Owner of the counter
    pub owner: Pubkey,
    /// Initial count (always 0)
    pub count: i64,
}

/// Event emitted when a counter is incremented
#[event]
pub struct CounterIncremented {
    /// The counter account public key
    pub counter: Pubkey,
    /// Owner who signed the increment
    pub owner: Pubkey,
    /// Count before the increment
    pub previous_count: i64,
    /// Count after the increment
    pub new_count: i64,
}

/// Event emitted when a counter is decremented
#[event]
pub struct CounterDecremented {
    /// The counter account public key
    pub counter: Pubkey,
    /// Owner who signed the decrement
    pub owner: Pubkey,
    /// Count before the decrement
    pub previous_count: i64,
    /// Count after the decrement
    pub new_count: i64,
}

/// Event emitted when a counter is reset to zero
#[event]
pub struct CounterReset {
    pub counter: Pubkey,
    pub owner: Pubkey,
    /// Count that was discarded by the reset
    pub previous_count: i64,
}
