//! # Revoke Session Instruction
//!
//! The parent voids the session key's authority immediately.
//!
//! Revocation does not look at whether the session is still active: it is
//! allowed at any time and simply pulls `session_expires_at` back to `now`.
//! The session key stays recorded but can no longer trade.

use anchor_lang::prelude::*;

use crate::constants::{VAULT_SEED, VAULT_VERSION_SEED};
use crate::errors::VaultError;
use crate::events::SessionRevokedEvent;
use crate::state::VaultAccount;

/// # revoke_session
///
/// ## Returns
///
/// * `Ok(())` - Session voided
/// * `Err(VaultError::Unauthorized)` - Signer is not the vault's parent
pub fn revoke_session(ctx: Context<RevokeSession>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let vault_key = ctx.accounts.vault.key();
    let parent_key = ctx.accounts.parent_wallet.key();

    let vault = &mut ctx.accounts.vault;
    let previous_expires_at = vault.revoke(&parent_key, now)?;

    emit!(SessionRevokedEvent {
        parent_wallet: parent_key,
        ephemeral_wallet: vault.ephemeral_wallet,
        vault: vault_key,
        previous_expires_at,
        timestamp: now,
    });

    msg!(
        "Session for key {} on vault {} revoked",
        vault.ephemeral_wallet,
        vault_key
    );

    Ok(())
}

#[derive(Accounts)]
pub struct RevokeSession<'info> {
    #[account(mut)]
    pub parent_wallet: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, VAULT_VERSION_SEED, parent_wallet.key().as_ref()],
        bump = vault.bump,
        has_one = parent_wallet @ VaultError::Unauthorized
    )]
    pub vault: Account<'info, VaultAccount>,
}
