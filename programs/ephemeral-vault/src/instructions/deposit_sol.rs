//! # Deposit SOL Instruction
//!
//! Moves lamports from the parent wallet into the vault PDA.
//!
//! ```text
//! BEFORE:                              AFTER:
//!
//! Parent Wallet                        Parent Wallet
//! └── SOL: 5                           └── SOL: 4 (-1)
//!
//! Vault PDA                            Vault PDA
//! └── lamports: rent                   └── lamports: rent + 1 SOL
//! ```
//!
//! Deposits are not gated by the session: the parent may fund the vault
//! after the session has expired or been revoked.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::{VAULT_SEED, VAULT_VERSION_SEED};
use crate::errors::VaultError;
use crate::events::SolDepositedEvent;
use crate::state::VaultAccount;

/// # deposit_sol
///
/// ## Arguments
///
/// * `amount` - Lamports to deposit (1 SOL = 1_000_000_000)
///
/// ## Returns
///
/// * `Ok(())` - Deposit successful
/// * `Err(VaultError::InvalidAmount)` - Amount is zero
/// * `Err(VaultError::InsufficientFunds)` - Parent cannot cover the transfer
pub fn deposit_sol(ctx: Context<DepositSol>, amount: u64) -> Result<()> {
    require!(amount > 0, VaultError::InvalidAmount);
    require!(
        ctx.accounts.parent_wallet.lamports() >= amount,
        VaultError::InsufficientFunds
    );

    let cpi_context = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.parent_wallet.to_account_info(),
            to: ctx.accounts.vault.to_account_info(),
        },
    );
    system_program::transfer(cpi_context, amount)?;

    let vault_key = ctx.accounts.vault.key();
    let vault_lamports = ctx.accounts.vault.to_account_info().lamports();
    let now = Clock::get()?.unix_timestamp;

    emit!(SolDepositedEvent {
        parent_wallet: ctx.accounts.parent_wallet.key(),
        vault: vault_key,
        amount,
        vault_lamports,
        timestamp: now,
    });

    msg!(
        "Deposited {} lamports into vault {}. Vault balance: {}",
        amount,
        vault_key,
        vault_lamports
    );

    Ok(())
}

/// # DepositSol Accounts
///
/// ### `has_one = parent_wallet`
/// SECURITY: the record must name the signer as its parent.
/// (Seed derivation already implies it; the stored field is checked too.)
#[derive(Accounts)]
pub struct DepositSol<'info> {
    #[account(mut)]
    pub parent_wallet: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, VAULT_VERSION_SEED, parent_wallet.key().as_ref()],
        bump = vault.bump,
        has_one = parent_wallet @ VaultError::Unauthorized
    )]
    pub vault: Account<'info, VaultAccount>,

    /// Needed for the transfer CPI.
    pub system_program: Program<'info, System>,
}
