use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::transfer_token;
use crate::event::*;

/**
 * Account context for claiming from a window
 *
 * Anyone may submit the claim and pay for the claim status account. The
 * tokens always go to the recipient named in the leaf, never to the payer.
 *
 * Access Control: Any signer holding a valid merkle proof for the recipient
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(window_index: u64)]
pub struct Claim<'info> {
    /// Registry the window was created in
    #[account(
        seeds = [WINDOW_REGISTRY_SEED.as_bytes(), registry.owner.as_ref()],
        bump = registry.bump
    )]
    pub registry: Account<'info, WindowRegistry>,

    /// The window being claimed from
    /// - Derived from: ["window", registry, window_index]
    /// CHECK: Deserialized in the handler so a missing window reports WindowNotFound
    #[account(
        mut,
        seeds = [
            WINDOW_SEED.as_bytes(),
            registry.key().as_ref(),
            window_index.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub window: UncheckedAccount<'info>,

    /// Claim progress of the recipient in this window
    /// - Derived from: ["claim", window_key, recipient_key]
    #[account(
        init_if_needed,
        payer = payer,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), window.key().as_ref(), recipient.key().as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// Vault holding the window's funds
    /// - Derived from: ["vault", window_key]
    /// CHECK: Address fixed by seeds, validated by the token program on transfer
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), window.key().as_ref()],
        bump
    )]
    pub token_vault: UncheckedAccount<'info>,

    /// Recipient named in the leaf
    /// CHECK: Only its key is used, hashed into the leaf
    pub recipient: UncheckedAccount<'info>,

    /// Recipient's token account receiving the payout
    #[account(
        mut,
        token::mint = reward_token,
        token::authority = recipient,
        token::token_program = token_program,
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Mint of the window's reward token
    #[account(mint::token_program = token_program)]
    pub reward_token: InterfaceAccount<'info, Mint>,

    /// Whoever submits the claim
    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Claims the vested part of a recipient's leaf
 *
 * @param window_index - Index of the window in the registry
 * @param amount - Full leaf amount of the recipient
 * @param proof - Sibling digests from the leaf up to the window's root
 *
 * Process:
 * 1. Resolve the window, failing with WindowNotFound if it does not exist
 * 2. Verify the leaf and compute the newly vested amount
 * 3. Record the claim on the window and the claim status
 * 4. Transfer the payout from the vault to the recipient
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    window_index: u64,
    amount: u64,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    // ===== WINDOW LOOKUP =====

    let window_info = ctx.accounts.window.to_account_info();
    let mut window = MerkleWindow::load(
        &ctx.accounts.registry,
        window_index,
        &window_info,
        &ctx.accounts.reward_token.key(),
    )?;

    // ===== VERIFICATION AND EFFECTS =====

    let recipient_key = ctx.accounts.recipient.key();
    let now = Clock::get()?.unix_timestamp;

    let claim_status = &mut ctx.accounts.claim_status;
    let amount_paid = window.process_claim(claim_status, &recipient_key, amount, &proof, now)?;
    claim_status.record_rent_payer(ctx.accounts.payer.key());
    let recipient_claimed = claim_status.claimed_amount;

    window.store(&window_info)?;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    let registry_key = ctx.accounts.registry.key();
    let index_bytes = window.index.to_le_bytes();
    let seeds = &[
        WINDOW_SEED.as_bytes(),
        registry_key.as_ref(),
        index_bytes.as_ref(),
        &[window.bump],
    ];
    let signer = &[&seeds[..]];

    transfer_token(
        window_info.clone(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.recipient_token_account.to_account_info(),
        ctx.accounts.reward_token.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount_paid,
        ctx.accounts.reward_token.decimals,
        Some(signer),
    )?;

    emit_cpi!(RewardsClaimed {
        window: window_info.key(),
        window_index,
        recipient: recipient_key,
        caller: ctx.accounts.payer.key(),
        amount_paid,
        leaf_amount: amount,
        recipient_claimed,
        window_claimed: window.claimed_amount,
    });

    Ok(())
}
