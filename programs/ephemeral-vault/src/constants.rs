//! # Program Constants
//!
//! Fixed values shared by the on-chain handlers and the host-side ledger.
//!
//! ## Vault Address Seeds:
//!
//! ```text
//! Seeds: ["vault", "v2", parent_wallet] + bump
//!                    ↓
//!         find_program_address (SHA256, off-curve search)
//!                    ↓
//!         Vault PDA: one per parent wallet
//! ```

/// Domain tag identifying vault records.
pub const VAULT_SEED: &[u8] = b"vault";

/// Version tag. Bumping it moves every vault to a fresh address space.
pub const VAULT_VERSION_SEED: &[u8] = b"v2";

/// Length of every account and instruction discriminator.
pub const DISCRIMINATOR_LEN: usize = 8;
