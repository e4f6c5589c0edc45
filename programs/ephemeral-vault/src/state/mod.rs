//! # State Module
//!
//! Account structures stored on-chain by the Ephemeral Vault program.
//!
//! ## Key Concepts:
//!
//! - **PDA (Program Derived Address)**: the vault lives at an address computed from
//!   fixed seeds and the parent wallet, so nobody can pick it and nobody holds its key.
//! - **Discriminator**: the first 8 bytes of every record name its type, so foreign
//!   data is rejected before any field is read.

pub mod vault;

pub use vault::*;
