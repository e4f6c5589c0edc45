//! # Events Module
//!
//! This module defines all events that the Ephemeral Vault program emits.
//! Events are written to the transaction logs and picked up by off-chain
//! indexers (session dashboards, risk engines, audit trails).
//!
//! ## Event Flow:
//! ```text
//! Parent creates session
//!        ↓
//! Vault Program emits VaultCreatedEvent
//!        ↓
//! Ephemeral key trades → TradePlacedEvent (one per position update)
//!        ↓
//! Parent revokes       → SessionRevokedEvent
//! ```

use anchor_lang::prelude::*;

/// # VaultCreatedEvent
///
/// Emitted when a parent wallet opens a vault and authorizes a session key.
#[event]
pub struct VaultCreatedEvent {
    /// The parent wallet that controls the vault
    pub parent_wallet: Pubkey,
    /// The session key granted trading authority
    pub ephemeral_wallet: Pubkey,
    /// The vault PDA address
    pub vault: Pubkey,
    /// Absolute unix timestamp at which the session lapses
    pub session_expires_at: i64,
    /// Unix timestamp of creation
    pub timestamp: i64,
}

/// # SolDepositedEvent
///
/// Emitted when the parent moves lamports into the vault.
///
/// ## Example Log:
/// ```text
/// SolDepositedEvent {
///     parent_wallet: "7xKt9Fj2...",
///     vault: "9Yht3Mk7...",
///     amount: 1_000_000_000,      // 1 SOL
///     vault_lamports: 1_001_566_000,
///     timestamp: 1699123456
/// }
/// ```
#[event]
pub struct SolDepositedEvent {
    pub parent_wallet: Pubkey,
    pub vault: Pubkey,
    /// Lamports deposited
    pub amount: u64,
    /// Vault lamport balance after the deposit (includes rent reserve)
    pub vault_lamports: u64,
    pub timestamp: i64,
}

/// # TradePlacedEvent
///
/// Emitted when the session key overwrites the tracked position.
/// The previous values are included so indexers can rebuild history
/// without replaying account snapshots.
#[event]
pub struct TradePlacedEvent {
    pub vault: Pubkey,
    pub ephemeral_wallet: Pubkey,
    pub previous_size: i64,
    pub previous_price: i64,
    /// New signed position size (positive = long, negative = short)
    pub size: i64,
    /// Entry price recorded with the position
    pub price: i64,
    pub timestamp: i64,
}

/// # SessionRevokedEvent
///
/// Emitted when the parent voids the session key's authority.
#[event]
pub struct SessionRevokedEvent {
    pub parent_wallet: Pubkey,
    pub ephemeral_wallet: Pubkey,
    pub vault: Pubkey,
    /// Expiry that was stored before the revocation
    pub previous_expires_at: i64,
    pub timestamp: i64,
}
