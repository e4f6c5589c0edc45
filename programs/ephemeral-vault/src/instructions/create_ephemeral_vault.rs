//! # Create Ephemeral Vault Instruction
//!
//! Opens the parent's vault and grants a session key time-boxed trading authority.
//! Each parent can only have ONE vault (enforced by PDA derivation).
//!
//! ## Account Diagram:
//!
//! ```text
//! BEFORE:                          AFTER:
//!
//! Parent Wallet                    Parent Wallet
//! └── Has SOL for fees             └── Has SOL for fees (minus rent)
//!
//!                                  Vault PDA (created)
//!                                  ├── parent_wallet: Parent
//!                                  ├── ephemeral_wallet: Session key
//!                                  ├── session_expires_at: now + duration
//!                                  └── position: flat (0 @ 0)
//! ```

use anchor_lang::prelude::*;

use crate::constants::{VAULT_SEED, VAULT_VERSION_SEED};
use crate::errors::VaultError;
use crate::events::VaultCreatedEvent;
use crate::state::VaultAccount;

/// # create_ephemeral_vault
///
/// ## Arguments
///
/// * `ctx` - Context containing all required accounts
/// * `session_duration` - Seconds of authority granted to the session key.
///   A negative value creates a session that is already expired.
///
/// ## Returns
///
/// * `Ok(())` - Vault created
/// * `Err(VaultError::VaultAlreadyExists)` - Parent already has a vault
/// * `Err(VaultError::Overflow)` - `now + session_duration` does not fit in i64
///
/// ## Example (TypeScript client):
///
/// ```typescript
/// await program.methods
///     .createEphemeralVault(new BN(3600))
///     .accounts({
///         parentWallet: wallet.publicKey,
///         ephemeralWallet: sessionKey.publicKey,
///         vault: vaultPda,
///         systemProgram: SystemProgram.programId,
///     })
///     .rpc();
/// ```
pub fn create_ephemeral_vault(
    ctx: Context<CreateEphemeralVault>,
    session_duration: i64,
) -> Result<()> {
    // init_if_needed hands us the existing record instead of failing inside
    // the System Program, so reject it here with our own code.
    require!(
        !ctx.accounts.vault.is_initialized(),
        VaultError::VaultAlreadyExists
    );

    let now = Clock::get()?.unix_timestamp;

    let vault_key = ctx.accounts.vault.key();
    let parent_key = ctx.accounts.parent_wallet.key();
    let ephemeral_key = ctx.accounts.ephemeral_wallet.key();

    let record = VaultAccount::open(
        parent_key,
        ephemeral_key,
        session_duration,
        ctx.bumps.vault,
        now,
    )?;
    let session_expires_at = record.session_expires_at;
    ctx.accounts.vault.set_inner(record);

    emit!(VaultCreatedEvent {
        parent_wallet: parent_key,
        ephemeral_wallet: ephemeral_key,
        vault: vault_key,
        session_expires_at,
        timestamp: now,
    });

    msg!(
        "Vault {} created for parent {}. Session key {} valid until {}",
        vault_key,
        parent_key,
        ephemeral_key,
        session_expires_at
    );

    Ok(())
}

/// # CreateEphemeralVault Accounts
///
/// ## Constraints Explained:
///
/// ### `init_if_needed`
/// - Allocates the vault on first use, paid by the parent
/// - On an existing vault the handler rejects with `VaultAlreadyExists`
///
/// ### `seeds = [b"vault", b"v2", parent_wallet]`
/// - One vault per parent, at an address nobody can choose
#[derive(Accounts)]
pub struct CreateEphemeralVault<'info> {
    /// The parent creating the vault. Pays rent, so `mut`.
    #[account(mut)]
    pub parent_wallet: Signer<'info>,

    /// CHECK: only the public key is recorded; the session key signs later trades.
    pub ephemeral_wallet: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        seeds = [VAULT_SEED, VAULT_VERSION_SEED, parent_wallet.key().as_ref()],
        bump,
        payer = parent_wallet,
        space = VaultAccount::LEN
    )]
    pub vault: Account<'info, VaultAccount>,

    pub system_program: Program<'info, System>,
}
