//! # Place Trade Instruction
//!
//! The session key records a new position on the parent's vault.
//!
//! ## Important Notes:
//!
//! - No lamports move: this is risk accounting only
//! - The position is overwritten, not accumulated
//! - Margin and liquidation checks belong to the external risk engine
//!
//! ```text
//! Session key: "Long 10 @ 2000"   (now <  expires_at) → ALLOWED ✓
//! Session key: "Long 20 @ 2100"   (now >= expires_at) → REJECTED ❌ SessionExpired
//! Other key:   "Short 5 @ 1900"                       → REJECTED ❌ Unauthorized
//! ```

use anchor_lang::prelude::*;

use crate::constants::{VAULT_SEED, VAULT_VERSION_SEED};
use crate::errors::VaultError;
use crate::events::TradePlacedEvent;
use crate::state::VaultAccount;

/// # place_trade
///
/// ## Arguments
///
/// * `size` - Signed position size (positive = long, negative = short, 0 = flat)
/// * `price` - Entry price for the position
///
/// ## Returns
///
/// * `Ok(())` - Position recorded
/// * `Err(VaultError::Unauthorized)` - Signer is not the vault's session key
/// * `Err(VaultError::SessionExpired)` - Session lapsed or was revoked
pub fn place_trade(ctx: Context<PlaceTrade>, size: i64, price: i64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let vault_key = ctx.accounts.vault.key();
    let signer = ctx.accounts.ephemeral_wallet.key();

    let vault = &mut ctx.accounts.vault;
    let previous_size = vault.position_size;
    let previous_price = vault.entry_price;

    vault.record_trade(&signer, size, price, now)?;

    emit!(TradePlacedEvent {
        vault: vault_key,
        ephemeral_wallet: signer,
        previous_size,
        previous_price,
        size,
        price,
        timestamp: now,
    });

    msg!(
        "Position on vault {} set to {} @ {} ({}s of session left)",
        vault_key,
        size,
        price,
        vault.session_remaining(now)
    );

    Ok(())
}

/// # PlaceTrade Accounts
///
/// The parent does not sign: the session key acts alone. The parent
/// wallet is only passed to derive and check the vault address.
#[derive(Accounts)]
pub struct PlaceTrade<'info> {
    #[account(mut)]
    pub parent_wallet: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, VAULT_VERSION_SEED, parent_wallet.key().as_ref()],
        bump = vault.bump,
        has_one = parent_wallet @ VaultError::Unauthorized,
        has_one = ephemeral_wallet @ VaultError::Unauthorized
    )]
    pub vault: Account<'info, VaultAccount>,

    pub ephemeral_wallet: Signer<'info>,
}
