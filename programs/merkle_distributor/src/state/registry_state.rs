use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;

/**
 * Window registry account
 *
 * Assigns sequential window indices for one owner. Windows are append-only:
 * an index is handed out once and the counter never moves backwards.
 *
 * Derivation: ["window_registry", owner]
 *
 * Lifecycle:
 * 1. Created on the owner's first create_window (using init_if_needed)
 * 2. window_count incremented with each new window
 * 3. Never closed
 */
#[account]
#[derive(Default, Debug)]
pub struct WindowRegistry {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Owner allowed to create and withdraw windows
    pub owner: Pubkey,

    /// Number of windows created so far
    /// - Also the index the next window receives
    pub window_count: u64,
}

impl WindowRegistry {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<WindowRegistry>();

    /// Registry PDA and bump of `owner`.
    pub fn address(owner: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[WINDOW_REGISTRY_SEED.as_bytes(), owner.as_ref()],
            &crate::ID,
        )
    }

    /// Hands out the next window index.
    pub fn assign_index(&mut self) -> Result<u64> {
        let index = self.window_count;
        self.window_count = index
            .checked_add(1)
            .ok_or(MerkleDistributorError::ArithmeticOverflow)?;
        Ok(index)
    }

    pub fn contains(&self, window_index: u64) -> bool {
        window_index < self.window_count
    }
}
