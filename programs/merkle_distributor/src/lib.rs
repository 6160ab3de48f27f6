use anchor_lang::prelude::*;

declare_id!("56uu8hrAv12NHhNFsRTe6ahHLPErajrd8FF9sg49adMe");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;


use instructions::*;

/**
 * Merkle Distributor Program
 *
 * Pays out large pre-committed sets of token rewards in windows. Each window
 * stores a single merkle root over (recipient, amount, window_index) leaves;
 * recipients redeem their payout by presenting an inclusion proof.
 *
 * Key Features:
 * - Append-only windows with sequential indices per owner
 * - Roots are immutable once committed
 * - Optional linear vesting over [vesting_start, vesting_end], claimable
 *   incrementally as it vests
 * - Anyone may submit a claim, funds always go to the leaf's recipient
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Window Registry PDA: per-owner counter assigning window indices
 * - Window PDA: root, reward token, amounts and vesting bounds
 * - Token Vault PDA: holds the window's funds, authority is the window
 * - Claim Status PDAs: amount already paid per (window, recipient)
 *
 * Trees and proofs are built off-chain with the `distributor_merkle_tree`
 * crate, which also provides the verifier used here.
 *
 * Workflow:
 * 1. Owner builds the tree off-chain and creates a funded window
 * 2. Recipients (or anyone on their behalf) claim with a proof
 * 3. Owner may recover the unclaimed balance, closing the window
 * 4. Rent payers can close ClaimStatus accounts of closed windows
 */
#[program]
pub mod merkle_distributor {
    use super::*;

    /**
     * Creates and funds a new window
     *
     * Assigns the next index of the owner's registry and moves total_amount
     * into the window's vault.
     *
     * @param merkle_root - 32-byte root over all leaves of the window
     * @param total_amount - Amount deposited for the window
     * @param vesting_start - Unix timestamp where vesting begins
     * @param vesting_end - Unix timestamp where vesting completes
     *
     * Access Control: Owner only
     */
    pub fn create_window(
        ctx: Context<CreateWindow>,
        merkle_root: [u8; 32],
        total_amount: u64,
        vesting_start: i64,
        vesting_end: i64,
    ) -> Result<()> {
        handle_create_window(ctx, merkle_root, total_amount, vesting_start, vesting_end)
    }

    /**
     * Claims vested rewards for a recipient
     *
     * @param window_index - Index of the window in the registry
     * @param amount - Full leaf amount of the recipient
     * @param proof - Array of 32-byte hashes forming the merkle proof
     *
     * Access Control: Anyone with a valid proof; tokens go to the recipient
     */
    pub fn claim(
        ctx: Context<Claim>,
        window_index: u64,
        amount: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        handle_claim(ctx, window_index, amount, proof)
    }

    /**
     * Recovers the unclaimed balance of a window and closes it
     *
     * Access Control: Owner only
     */
    pub fn withdraw_window(ctx: Context<WithdrawWindow>) -> Result<()> {
        handle_withdraw_window(ctx)
    }

    /**
     * Closes a ClaimStatus account of a closed window and reclaims rent
     *
     * Access Control: Rent payer of the ClaimStatus
     */
    pub fn close_claim_status(ctx: Context<CloseClaimStatus>) -> Result<()> {
        handle_close_claim_status(ctx)
    }
}
