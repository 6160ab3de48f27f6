use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new merkle window
 *
 * - Creates the owner's window registry on first use
 * - Creates the window PDA at the registry's next sequential index
 * - Creates a token vault PDA owned by the window
 * - Moves the window's total amount from the owner into the vault
 *
 * Access Control: Only the owner can create windows in their registry
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateWindow<'info> {
    /// Window registry of the owner (PDA)
    /// - Derived from: ["window_registry", owner]
    /// - window_count is the index the new window receives
    #[account(
        init_if_needed,
        payer = owner,
        space = WindowRegistry::LEN,
        seeds = [WINDOW_REGISTRY_SEED.as_bytes(), owner.key().as_ref()],
        bump
    )]
    pub registry: Account<'info, WindowRegistry>,

    /// The new window (PDA)
    /// - Derived from: ["window", registry, window_count]
    /// - `init` fails if the index was ever used before
    #[account(
        init,
        payer = owner,
        space = MerkleWindow::LEN,
        seeds = [
            WINDOW_SEED.as_bytes(),
            registry.key().as_ref(),
            registry.window_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub window: Account<'info, MerkleWindow>,

    /// Token vault (PDA) holding the window's funds
    /// - Derived from: ["vault", window_key]
    #[account(
        init,
        token::mint = reward_token,
        token::authority = window,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), window.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Mint of the token paid out by the window
    #[account(mint::token_program = token_program)]
    pub reward_token: InterfaceAccount<'info, Mint>,

    /// Owner's token account funding the window
    #[account(
        mut,
        token::mint = reward_token,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    pub rent: Sysvar<'info, Rent>,
}

/**
 * Creates and funds a new merkle window
 *
 * @param merkle_root - Root over every (recipient, amount, window_index) leaf
 * @param total_amount - Amount deposited, upper bound for all claims
 * @param vesting_start - Unix timestamp where linear vesting begins
 * @param vesting_end - Unix timestamp where everything is vested
 */
pub fn handle_create_window(
    ctx: Context<CreateWindow>,
    merkle_root: [u8; 32],
    total_amount: u64,
    vesting_start: i64,
    vesting_end: i64,
) -> Result<()> {
    let params = WindowParams {
        merkle_root,
        total_amount,
        vesting_start,
        vesting_end,
    };
    let owner_key = ctx.accounts.owner.key();

    let registry = &mut ctx.accounts.registry;
    if registry.owner == Pubkey::default() {
        registry.owner = owner_key;
        registry.bump = ctx.bumps.registry;
    }
    let window_index = registry.assign_index()?;
    let registry_key = registry.key();

    let window_key = ctx.accounts.window.key();
    let token_vault_key = ctx.accounts.token_vault.key();
    let reward_token_key = ctx.accounts.reward_token.key();

    ctx.accounts.window.initialize(
        ctx.bumps.window,
        registry_key,
        window_index,
        owner_key,
        reward_token_key,
        token_vault_key,
        params,
    )?;

    transfer_token(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.reward_token.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        total_amount,
        ctx.accounts.reward_token.decimals,
        None,
    )?;

    emit_cpi!(WindowCreated {
        window: window_key,
        window_index,
        owner: owner_key,
        reward_token: reward_token_key,
        token_vault: token_vault_key,
        merkle_root,
        total_amount,
        vesting_start,
        vesting_end,
    });

    Ok(())
}
