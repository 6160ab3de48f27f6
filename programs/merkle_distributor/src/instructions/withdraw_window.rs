use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::transfer_token;
use crate::event::*;

/**
 * Account context for recovering a window's unclaimed funds
 *
 * Moves whatever is left in the vault back to the owner and closes the
 * window for further claims. The window account itself stays so its index
 * can never be reused.
 *
 * Access Control: Only the owner of the window
 */
#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawWindow<'info> {
    /// The window to close
    #[account(
        mut,
        seeds = [
            WINDOW_SEED.as_bytes(),
            window.registry.as_ref(),
            window.index.to_le_bytes().as_ref()
        ],
        bump = window.bump,
        constraint = owner.key() == window.owner @ MerkleDistributorError::OnlyOwner
    )]
    pub window: Account<'info, MerkleWindow>,

    /// Vault holding the remaining funds
    /// - Derived from: ["vault", window_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), window.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Owner's token account receiving the remaining funds
    #[account(
        mut,
        token::mint = reward_token,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Mint of the window's reward token
    #[account(
        mint::token_program = token_program,
        constraint = reward_token.key() == window.reward_token @ MerkleDistributorError::TokenMintMismatch
    )]
    pub reward_token: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_withdraw_window(ctx: Context<WithdrawWindow>) -> Result<()> {
    let window = &mut ctx.accounts.window;
    require!(!window.closed, MerkleDistributorError::WindowClosed);

    window.closed = true;

    let window_key = window.key();
    let window_index = window.index;
    let registry_key = window.registry;
    let window_bump = window.bump;
    let remaining_balance = ctx.accounts.token_vault.amount;

    let index_bytes = window_index.to_le_bytes();
    let seeds = &[
        WINDOW_SEED.as_bytes(),
        registry_key.as_ref(),
        index_bytes.as_ref(),
        &[window_bump],
    ];
    let signer = &[&seeds[..]];

    if remaining_balance > 0 {
        transfer_token(
            ctx.accounts.window.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.owner_token_account.to_account_info(),
            ctx.accounts.reward_token.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            remaining_balance,
            ctx.accounts.reward_token.decimals,
            Some(signer),
        )?;
    }

    emit_cpi!(WindowWithdrawn {
        window: window_key,
        window_index,
        owner: ctx.accounts.owner.key(),
        amount_withdrawn: remaining_balance,
    });

    Ok(())
}
