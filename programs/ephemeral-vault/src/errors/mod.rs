//! # Error Handling Module
//!
//! This module defines all custom errors that can occur in the Ephemeral Vault program.
//! Each error has a unique code and descriptive message to help debug issues.
//!
//! ## How Errors Work in Anchor:
//!
//! When something goes wrong, we return an error like this:
//! ```rust,ignore
//! require!(vault.is_active(now), VaultError::SessionExpired);
//! ```
//!
//! The error is then propagated to the client with its code and message.
//!
//! ## Error Codes:
//! Anchor assigns error codes starting from 6000 (0x1770) in declaration order.
//! The order below is part of the wire contract: never reorder, only append.

use anchor_lang::prelude::*;

/// # VaultError
///
/// All possible errors that can occur when interacting with the vault program.
///
/// ## Error Categories:
///
/// | Category | Errors | Description |
/// |----------|--------|-------------|
/// | Lifecycle | `SessionExpired`, `VaultAlreadyExists`, `VaultNotFound` | Operation invalid for current state |
/// | Authorization | `NotSigned`, `Unauthorized` | Caller lacks signature or identity |
/// | Integrity | `InvalidAccountType`, `CorruptAccount`, `DerivationFailed`, `InvalidVaultAddress` | Stored data fails validation |
/// | Resource | `InsufficientFunds`, `InvalidAmount`, `Overflow` | Balance-moving operation rejected |
#[error_code]
pub enum VaultError {
    /// The ephemeral key's session is no longer active.
    ///
    /// ## When this occurs:
    /// - `now >= session_expires_at` (the boundary itself counts as expired)
    /// - The parent revoked the session
    ///
    /// ## How to fix:
    /// The parent has to create a new session.
    #[msg("Session expired")]
    SessionExpired, // 6000

    /// A required signature is missing from the transaction.
    #[msg("Required signer did not sign the transaction")]
    NotSigned, // 6001

    /// The signer is not the identity recorded in the vault.
    ///
    /// ## When this occurs:
    /// - A key other than `ephemeral_wallet` tries to place a trade
    /// - A key other than `parent_wallet` tries to revoke or deposit
    #[msg("Signer is not authorized for this vault")]
    Unauthorized, // 6002

    /// A vault record already exists at the derived address.
    #[msg("Vault already exists for this parent wallet")]
    VaultAlreadyExists, // 6003

    /// No vault record exists at the derived address.
    #[msg("Vault does not exist - create it first")]
    VaultNotFound, // 6004

    /// Account data does not start with the vault discriminator.
    #[msg("Account data is not a vault record")]
    InvalidAccountType, // 6005

    /// Account data has the vault discriminator but not the vault layout.
    #[msg("Vault record is corrupt")]
    CorruptAccount, // 6006

    /// No bump seed produces an off-curve vault address.
    ///
    /// ## This is a configuration error:
    /// It cannot happen for real seeds; retrying will not help.
    #[msg("Vault address derivation failed")]
    DerivationFailed, // 6007

    /// The stored bump does not reproduce the account's own address.
    #[msg("Vault address does not match its derivation seeds")]
    InvalidVaultAddress, // 6008

    /// The payer does not hold enough lamports for the transfer.
    #[msg("Insufficient funds for this operation")]
    InsufficientFunds, // 6009

    /// Deposit amount must be greater than zero.
    #[msg("Amount must be greater than zero")]
    InvalidAmount, // 6010

    /// Arithmetic overflow on expiry or balance.
    #[msg("Arithmetic overflow")]
    Overflow, // 6011
}
