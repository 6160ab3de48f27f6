use anchor_lang::prelude::*;

/**
 * Claim status account
 *
 * Tracks how much of one recipient's leaf has been paid out in a window.
 * The leaf becomes terminal once claimed_amount reaches the leaf amount.
 *
 * Derivation: ["claim", window_key, recipient_key]
 *
 * Lifecycle:
 * 1. Created on the first claim for the recipient (using init_if_needed)
 * 2. Updated with each subsequent vested claim
 * 3. Can be closed by its rent payer once the window is closed
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimStatus {
    /// Total amount paid out for this leaf (cumulative)
    pub claimed_amount: u64,

    /// Account that paid rent for this claim status
    /// - Not necessarily the recipient
    pub rent_payer: Pubkey,
}

impl ClaimStatus {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimStatus>();

    /// Records who paid rent on the first claim. Later payers do not take
    /// over the rent refund.
    pub fn record_rent_payer(&mut self, payer: Pubkey) {
        if self.rent_payer == Pubkey::default() {
            self.rent_payer = payer;
        }
    }
}
