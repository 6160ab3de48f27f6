use anchor_lang::prelude::*;

/// Event emitted when a window is created and funded
#[event]
pub struct WindowCreated {
    /// The window account public key
    pub window: Pubkey,
    /// Sequential index of the window
    pub window_index: u64,
    /// Owner who created and funded the window
    pub owner: Pubkey,
    /// Reward token mint
    pub reward_token: Pubkey,
    /// Vault holding the window's funds
    pub token_vault: Pubkey,
    /// Committed merkle root
    pub merkle_root: [u8; 32],
    /// Amount deposited into the vault
    pub total_amount: u64,
    /// Vesting start (Unix timestamp)
    pub vesting_start: i64,
    /// Vesting end (Unix timestamp)
    pub vesting_end: i64,
}

/// Event emitted when rewards are claimed
#[event]
pub struct RewardsClaimed {
    /// The window account public key
    pub window: Pubkey,
    /// Sequential index of the window
    pub window_index: u64,
    /// Recipient named in the leaf, who received the tokens
    pub recipient: Pubkey,
    /// Signer who submitted the claim
    pub caller: Pubkey,
    /// Amount transferred in this claim
    pub amount_paid: u64,
    /// Full leaf amount of the recipient
    pub leaf_amount: u64,
    /// Amount paid for this leaf so far, this claim included
    pub recipient_claimed: u64,
    /// Amount paid out of the window so far, this claim included
    pub window_claimed: u64,
}

/// Event emitted when the owner recovers a window's unclaimed funds
#[event]
pub struct WindowWithdrawn {
    /// The window account public key
    pub window: Pubkey,
    /// Sequential index of the window
    pub window_index: u64,
    /// Owner who withdrew the tokens
    pub owner: Pubkey,
    /// Amount of tokens withdrawn
    pub amount_withdrawn: u64,
}

/// Event emitted when a ClaimStatus account is closed
#[event]
pub struct ClaimStatusClosed {
    /// The window account public key
    pub window: Pubkey,
    /// Recipient the claim status belonged to
    pub recipient: Pubkey,
    /// Total amount that was paid for this leaf
    pub claimed_amount: u64,
}
