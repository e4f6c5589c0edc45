// Suppress warnings from Anchor/Solana version mismatches
#![allow(unexpected_cfgs)]
#![allow(ambiguous_glob_reexports)]

//! # Ephemeral Vault
//!
//! A Solana smart contract (Anchor program) that lets a parent wallet hand
//! time-boxed trading authority to a disposable session key, without ever
//! exposing the parent's own key to a trading venue.
//!
//! ## Overview
//!
//! - **Create**: the parent opens a PDA vault and names a session key with an expiry
//! - **Deposit**: the parent moves SOL into the vault
//! - **Trade**: while the session is active, the session key records a position
//! - **Revoke**: the parent voids the session at any time
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    EPHEMERAL VAULT PROGRAM                       │
//! │                                                                  │
//! │  Parent A ──signs──> create / deposit / revoke                   │
//! │                          │                                       │
//! │                          ▼                                       │
//! │  ┌────────────────────────────────────────────┐                  │
//! │  │ Vault PDA ["vault", "v2", Parent A]         │                  │
//! │  │  • ephemeral_wallet, session_expires_at     │                  │
//! │  │  • position_size, entry_price               │                  │
//! │  │  • SOL balance (deposits only)              │                  │
//! │  └────────────────────────────────────────────┘                  │
//! │                          ▲                                       │
//! │  Session key ──signs──> place_trade (now < session_expires_at)   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Security Model
//!
//! 1. **PDA Control**: one vault per parent at a derived address, re-verified on every load
//! 2. **Session Guard**: trades need `now < session_expires_at`, evaluated on every call
//! 3. **Key Separation**: the session key can move the position but never funds
//! 4. **Revocation**: the parent can expire the session instantly
//! 5. **Atomic Operations**: every check runs before any state is written
//!
//! ## Instructions Summary
//!
//! | Instruction | Who Can Call | Description |
//! |-------------|--------------|-------------|
//! | `create_ephemeral_vault` | Parent | Create vault + session |
//! | `deposit_sol` | Parent | Add SOL to vault |
//! | `place_trade` | Session key | Overwrite tracked position |
//! | `revoke_session` | Parent | Expire session now |
//!
//! Off-chain, [`ledger::VaultLedger`] runs the same transitions against an
//! in-memory account map with an explicit clock.

use anchor_lang::prelude::*;

// Module declarations
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod processor;
pub mod state;

// Re-export for easier access
pub use constants::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("2Y2AseLPmKvaGRXsU4yB3hjjMgXyhh9Y4LVgsgkSzCoT");

/// # Ephemeral Vault Program
///
/// Each function becomes a callable instruction; the work happens in
/// the matching module under `instructions`.
#[program]
pub mod ephemeral_vault {
    use super::*;

    /// Create the caller's vault and authorize `ephemeral_wallet` for
    /// `session_duration` seconds.
    ///
    /// ## Errors:
    /// - `VaultAlreadyExists`: the parent already has a vault
    /// - `Overflow`: expiry does not fit in i64
    pub fn create_ephemeral_vault(
        ctx: Context<CreateEphemeralVault>,
        session_duration: i64,
    ) -> Result<()> {
        instructions::create_ephemeral_vault(ctx, session_duration)
    }

    /// Deposit lamports from the parent into the vault.
    ///
    /// ## Errors:
    /// - `InvalidAmount`: amount is 0
    /// - `InsufficientFunds`: parent balance too low
    pub fn deposit_sol(ctx: Context<DepositSol>, amount: u64) -> Result<()> {
        instructions::deposit_sol(ctx, amount)
    }

    /// Record a position as the session key.
    ///
    /// ## Errors:
    /// - `Unauthorized`: signer is not the vault's session key
    /// - `SessionExpired`: session lapsed or was revoked
    pub fn place_trade(ctx: Context<PlaceTrade>, size: i64, price: i64) -> Result<()> {
        instructions::place_trade(ctx, size, price)
    }

    /// Void the session key's authority immediately.
    pub fn revoke_session(ctx: Context<RevokeSession>) -> Result<()> {
        instructions::revoke_session(ctx)
    }
}
