//! # Instructions Module
//!
//! On-chain handlers for the Ephemeral Vault program. Each handler reads the
//! clock once and hands `now` to the matching `VaultAccount` transition.
//!
//! ## Available Instructions:
//!
//! | Instruction | Who Can Call | Description |
//! |-------------|--------------|-------------|
//! | `create_ephemeral_vault` | Parent wallet | Create vault, authorize session key |
//! | `deposit_sol` | Parent wallet | Move lamports into the vault |
//! | `place_trade` | Session key | Overwrite the tracked position |
//! | `revoke_session` | Parent wallet | Void the session immediately |
//!
//! ## Instruction Flow:
//!
//! ```text
//! 1. Parent opens session:   create_ephemeral_vault
//!                                   ↓
//! 2. Parent funds vault:     deposit_sol
//!                                   ↓
//! 3. Session key trades:     place_trade (repeatable until expiry)
//!                                   ↓
//! 4. Parent pulls the plug:  revoke_session (or the session simply lapses)
//! ```

pub mod create_ephemeral_vault;
pub mod deposit_sol;
pub mod place_trade;
pub mod revoke_session;

pub use create_ephemeral_vault::*;
pub use deposit_sol::*;
pub use place_trade::*;
pub use revoke_session::*;
