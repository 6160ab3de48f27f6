use anchor_lang::prelude::*;
use distributor_merkle_tree::{verify, ClaimLeaf};
use crate::constants::*;
use crate::error::*;
use crate::state::{ClaimStatus, WindowRegistry};

/**
 * Merkle window account
 *
 * One batch of payouts committed as a single merkle root, funded with one
 * reward token and released on one linear vesting schedule.
 *
 * Derivation: ["window", registry_key, window_index (u64 LE)]
 *
 * Lifecycle:
 * 1. Created and funded by create_window
 * 2. claimed_amount increments with every claim; nothing else changes
 * 3. Marked closed when the owner withdraws the unclaimed balance
 */
#[account]
#[derive(Default, Debug)]
pub struct MerkleWindow {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Registry that assigned this window's index
    pub registry: Pubkey,

    /// Sequential index within the registry
    pub index: u64,

    /// Owner of the registry, allowed to withdraw unclaimed funds
    pub owner: Pubkey,

    /// Root over hash(recipient, amount, index) for every payout
    /// - Immutable once the window exists
    pub merkle_root: [u8; 32],

    /// Mint of the token paid out by this window
    pub reward_token: Pubkey,

    /// Vault PDA holding the window's funds
    /// - Derived from: ["vault", window_key]
    pub token_vault: Pubkey,

    /// Amount deposited when the window was created
    pub total_amount: u64,

    /// Amount paid out to recipients so far
    /// - Never exceeds total_amount
    pub claimed_amount: u64,

    /// Vesting start (Unix timestamp)
    pub vesting_start: i64,

    /// Vesting end (Unix timestamp)
    /// - Equal to vesting_start means fully vested from the start
    pub vesting_end: i64,

    /// Set once the owner has recovered the unclaimed balance
    pub closed: bool,
}

/// Window parameters checked by [`MerkleWindow::initialize`]
#[derive(Clone, Copy, Debug)]
pub struct WindowParams {
    pub merkle_root: [u8; 32],
    pub total_amount: u64,
    pub vesting_start: i64,
    pub vesting_end: i64,
}

impl WindowParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.total_amount > 0, MerkleDistributorError::InvalidAmount);
        require!(
            self.vesting_start <= self.vesting_end,
            MerkleDistributorError::InvalidVestingRange
        );
        require!(
            self.merkle_root != [0; 32],
            MerkleDistributorError::InvalidMerkleRoot
        );
        Ok(())
    }
}

impl MerkleWindow {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<MerkleWindow>();

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        bump: u8,
        registry: Pubkey,
        index: u64,
        owner: Pubkey,
        reward_token: Pubkey,
        token_vault: Pubkey,
        params: WindowParams,
    ) -> Result<()> {
        params.validate()?;

        self.bump = bump;
        self.registry = registry;
        self.index = index;
        self.owner = owner;
        self.merkle_root = params.merkle_root;
        self.reward_token = reward_token;
        self.token_vault = token_vault;
        self.total_amount = params.total_amount;
        self.claimed_amount = 0;
        self.vesting_start = params.vesting_start;
        self.vesting_end = params.vesting_end;
        self.closed = false;
        Ok(())
    }

    /// Portion of `amount` vested at `now`, rounded down.
    ///
    /// Linear between vesting_start and vesting_end, zero before the start,
    /// everything from the end on (or immediately if start == end).
    pub fn vested_amount(&self, amount: u64, now: i64) -> Result<u64> {
        if self.vesting_end <= self.vesting_start || now >= self.vesting_end {
            return Ok(amount);
        }
        if now <= self.vesting_start {
            return Ok(0);
        }

        // spans between two i64 timestamps can exceed i64::MAX
        let elapsed = (now as i128 - self.vesting_start as i128) as u128;
        let duration = (self.vesting_end as i128 - self.vesting_start as i128) as u128;

        let vested = (amount as u128)
            .checked_mul(elapsed)
            .ok_or(MerkleDistributorError::ArithmeticOverflow)?
            / duration;

        u64::try_from(vested).map_err(|_| error!(MerkleDistributorError::ArithmeticOverflow))
    }

    /// Window PDA and bump for `index` in `registry`.
    ///
    /// This is the read path for clients: the window's state is the account
    /// data at this address.
    pub fn address(registry: &Pubkey, index: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                WINDOW_SEED.as_bytes(),
                registry.as_ref(),
                index.to_le_bytes().as_ref(),
            ],
            &crate::ID,
        )
    }

    /// Resolves window `index` of `registry` from its account.
    ///
    /// Fails with WindowNotFound for an index the registry never assigned
    /// or an account with no data.
    pub fn load(
        registry: &WindowRegistry,
        index: u64,
        info: &AccountInfo,
        reward_token: &Pubkey,
    ) -> Result<Self> {
        require!(registry.contains(index), MerkleDistributorError::WindowNotFound);
        require!(info.data_len() != 0, MerkleDistributorError::WindowNotFound);
        require!(
            info.owner == &crate::ID,
            MerkleDistributorError::WindowNotOwnedByProgram
        );

        let window = {
            let data = info.try_borrow_data()?;
            MerkleWindow::try_deserialize(&mut data.as_ref())?
        };
        require!(
            window.reward_token == *reward_token,
            MerkleDistributorError::TokenMintMismatch
        );
        Ok(window)
    }

    /// Writes the window back into its account.
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data;
        self.try_serialize(&mut writer)
    }

    pub fn remaining_amount(&self) -> u64 {
        self.total_amount.saturating_sub(self.claimed_amount)
    }

    /// Verifies a claim and records it, returning the amount to pay
    /// `recipient`.
    ///
    /// All checks run before either account is touched, so an error leaves
    /// both the window and the claim status exactly as they were.
    pub fn process_claim(
        &mut self,
        claim_status: &mut ClaimStatus,
        recipient: &Pubkey,
        amount: u64,
        proof: &[[u8; 32]],
        now: i64,
    ) -> Result<u64> {
        require!(!self.closed, MerkleDistributorError::WindowClosed);

        let already_paid = claim_status.claimed_amount;
        require!(
            already_paid == 0 || already_paid < amount,
            MerkleDistributorError::AlreadyClaimed
        );

        let leaf = ClaimLeaf::new(*recipient, amount, self.index).hash();
        require!(
            verify(proof, self.merkle_root, leaf),
            MerkleDistributorError::InvalidProof
        );

        let vested = self.vested_amount(amount, now)?;
        let payable = vested.saturating_sub(already_paid);
        if payable == 0 {
            return if already_paid > 0 {
                err!(MerkleDistributorError::AlreadyClaimed)
            } else {
                err!(MerkleDistributorError::NothingVested)
            };
        }

        let window_claimed = self
            .claimed_amount
            .checked_add(payable)
            .ok_or(MerkleDistributorError::ArithmeticOverflow)?;
        require!(
            window_claimed <= self.total_amount,
            MerkleDistributorError::InsufficientWindowBalance
        );

        claim_status.claimed_amount = vested;
        self.claimed_amount = window_claimed;

        Ok(payable)
    }
}
