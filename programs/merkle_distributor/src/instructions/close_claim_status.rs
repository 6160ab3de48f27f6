use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;
use crate::constants::*;

/**
 * Account context for closing claim status accounts
 *
 * Returns the rent of a ClaimStatus account to whoever paid it. Only allowed
 * once the window is closed: removing the account earlier would let the
 * recipient's leaf be claimed again.
 *
 * Access Control: Only the rent payer recorded in the ClaimStatus
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CloseClaimStatus<'info> {
    /// ClaimStatus account to be closed, rent returned to its payer
    /// - Derived from: ["claim", window_key, recipient_key]
    #[account(
        mut,
        close = rent_payer,
        seeds = [CLAIM_SEED.as_bytes(), window.key().as_ref(), recipient.key().as_ref()],
        bump,
        has_one = rent_payer
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// Window the claim status belongs to
    pub window: Account<'info, MerkleWindow>,

    /// CHECK: Only used for PDA derivation
    pub recipient: UncheckedAccount<'info>,

    #[account(mut)]
    pub rent_payer: Signer<'info>,
}

pub fn handle_close_claim_status(ctx: Context<CloseClaimStatus>) -> Result<()> {
    require!(ctx.accounts.window.closed, MerkleDistributorError::WindowNotClosed);

    emit_cpi!(ClaimStatusClosed {
        window: ctx.accounts.window.key(),
        recipient: ctx.accounts.recipient.key(),
        claimed_amount: ctx.accounts.claim_status.claimed_amount,
    });

    Ok(())
}
