//! # Ephemeral Vault Account Structure
//!
//! This file defines the vault record that stores session and position state.
//! Each parent wallet gets exactly one vault, which is a PDA (Program Derived Address).
//!
//! ## Real-World Analogy:
//! Think of this as a trading desk's access badge register:
//! - Who owns the desk (parent_wallet)
//! - Which temporary badge may trade today (ephemeral_wallet)
//! - When that badge stops working (session_expires_at)
//! - What the badge holder last booked (position_size, entry_price)
//!
//! All state transitions live here as plain methods taking `now` explicitly,
//! so the on-chain handlers and the host-side ledger share one implementation.

use anchor_lang::prelude::*;

use crate::constants::{DISCRIMINATOR_LEN, VAULT_SEED, VAULT_VERSION_SEED};
use crate::errors::VaultError;

/// # VaultAccount
///
/// ## Fields Explained:
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | parent_wallet | Pubkey | Controlling wallet, immutable after creation |
/// | ephemeral_wallet | Pubkey | Session key allowed to update the position |
/// | session_expires_at | i64 | Unix timestamp at which the session lapses |
/// | position_size | i64 | Signed size (positive = long, negative = short) |
/// | entry_price | i64 | Price of the last recorded position update |
/// | bump | u8 | PDA bump seed (used for address derivation) |
///
/// ## Security Notes:
/// - Only `ephemeral_wallet` can update the position, and only while the session is active
/// - Only `parent_wallet` can revoke the session
/// - Nothing in this program moves lamports out of the vault
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct VaultAccount {
    /// Size: 32 bytes
    pub parent_wallet: Pubkey,

    /// Revocation leaves this field in place; the expiry is what gates it.
    ///
    /// Size: 32 bytes
    pub ephemeral_wallet: Pubkey,

    /// The session is active while `now < session_expires_at`.
    ///
    /// Size: 8 bytes
    pub session_expires_at: i64,

    /// Size: 8 bytes
    pub position_size: i64,

    /// Size: 8 bytes
    pub entry_price: i64,

    /// Stored so later loads can verify the address with a single hash
    /// instead of searching for the bump again.
    ///
    /// Size: 1 byte
    pub bump: u8,
}

impl VaultAccount {
    /// Exact size of the stored record.
    ///
    /// ## Calculation:
    /// - 8 bytes: Anchor discriminator (identifies account type)
    /// - 32 bytes: parent_wallet (Pubkey)
    /// - 32 bytes: ephemeral_wallet (Pubkey)
    /// - 8 bytes: session_expires_at (i64)
    /// - 8 bytes: position_size (i64)
    /// - 8 bytes: entry_price (i64)
    /// - 1 byte: bump (u8)
    ///
    /// Total: 8 + 32 + 32 + 8 + 8 + 8 + 1 = 97 bytes
    pub const LEN: usize = DISCRIMINATOR_LEN + 32 + 32 + 8 + 8 + 8 + 1;

    /// Derives the vault address and canonical bump for `parent_wallet`.
    ///
    /// The bump search starts at 255 and walks down until the hash lands
    /// off the ed25519 curve, so nobody holds a private key for the result.
    pub fn derive_address(parent_wallet: &Pubkey) -> Result<(Pubkey, u8)> {
        Pubkey::try_find_program_address(
            &[VAULT_SEED, VAULT_VERSION_SEED, parent_wallet.as_ref()],
            &crate::ID,
        )
        .ok_or_else(|| error!(VaultError::DerivationFailed))
    }

    /// Checks that `address` is the PDA produced by this record's own
    /// `parent_wallet` and stored `bump`.
    pub fn verify_address(&self, address: &Pubkey) -> Result<()> {
        let expected = Pubkey::create_program_address(
            &[
                VAULT_SEED,
                VAULT_VERSION_SEED,
                self.parent_wallet.as_ref(),
                &[self.bump],
            ],
            &crate::ID,
        )
        .map_err(|_| error!(VaultError::InvalidVaultAddress))?;

        require_keys_eq!(expected, *address, VaultError::InvalidVaultAddress);
        Ok(())
    }

    /// Builds a fresh record for a new session.
    ///
    /// A negative `session_duration` is accepted and yields a session that
    /// is already expired.
    pub fn open(
        parent_wallet: Pubkey,
        ephemeral_wallet: Pubkey,
        session_duration: i64,
        bump: u8,
        now: i64,
    ) -> Result<Self> {
        let session_expires_at = now
            .checked_add(session_duration)
            .ok_or(VaultError::Overflow)?;

        Ok(Self {
            parent_wallet,
            ephemeral_wallet,
            session_expires_at,
            position_size: 0,
            entry_price: 0,
            bump,
        })
    }

    /// A zeroed account (freshly allocated by `init_if_needed`) has no parent.
    pub fn is_initialized(&self) -> bool {
        self.parent_wallet != Pubkey::default()
    }

    /// Session authority guard. The expiry instant itself is expired.
    pub fn is_active(&self, now: i64) -> bool {
        now < self.session_expires_at
    }

    /// Seconds of authority left, or 0 once the session is inactive.
    pub fn session_remaining(&self, now: i64) -> i64 {
        if self.is_active(now) {
            self.session_expires_at.saturating_sub(now)
        } else {
            0
        }
    }

    /// Overwrites the tracked position on behalf of the session key.
    ///
    /// ## Checks (in order):
    /// 1. `signer` is the recorded `ephemeral_wallet` → else `Unauthorized`
    /// 2. Session is active at `now` → else `SessionExpired`
    ///
    /// Nothing is written unless both pass.
    pub fn record_trade(&mut self, signer: &Pubkey, size: i64, price: i64, now: i64) -> Result<()> {
        require_keys_eq!(*signer, self.ephemeral_wallet, VaultError::Unauthorized);
        require!(self.is_active(now), VaultError::SessionExpired);

        self.position_size = size;
        self.entry_price = price;
        Ok(())
    }

    /// Voids the session immediately, returning the expiry it replaced.
    ///
    /// The expiry only ever moves earlier, so revoking a lapsed session
    /// cannot revive it and revoking twice changes nothing.
    pub fn revoke(&mut self, signer: &Pubkey, now: i64) -> Result<i64> {
        require_keys_eq!(*signer, self.parent_wallet, VaultError::Unauthorized);

        let previous = self.session_expires_at;
        self.session_expires_at = previous.min(now);
        Ok(previous)
    }

    /// Serializes the record as discriminator + Borsh body.
    pub fn pack(&self) -> Result<Vec<u8>> {
        let mut data = Vec::with_capacity(Self::LEN);
        self.try_serialize(&mut data)?;
        Ok(data)
    }

    /// Strict decode: the discriminator must match and the body must be
    /// exactly the fixed layout, with no missing or trailing bytes.
    pub fn unpack(data: &[u8]) -> Result<Self> {
        let discriminator = Self::DISCRIMINATOR;
        if data.len() < discriminator.len() || &data[..discriminator.len()] != discriminator {
            return err!(VaultError::InvalidAccountType);
        }
        require_eq!(data.len(), Self::LEN, VaultError::CorruptAccount);

        let mut body = &data[discriminator.len()..];
        let vault =
            Self::deserialize(&mut body).map_err(|_| error!(VaultError::CorruptAccount))?;
        require!(body.is_empty(), VaultError::CorruptAccount);
        Ok(vault)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(now: i64) -> VaultAccount {
        let parent = Pubkey::new_unique();
        let (_, bump) = VaultAccount::derive_address(&parent).unwrap();
        VaultAccount::open(parent, Pubkey::new_unique(), 3600, bump, now).unwrap()
    }

    #[test]
    fn open_sets_expiry_and_flat_position() {
        let vault = sample(1_000);
        assert_eq!(vault.session_expires_at, 4_600);
        assert_eq!(vault.position_size, 0);
        assert_eq!(vault.entry_price, 0);
        assert!(vault.is_initialized());
    }

    #[test]
    fn open_rejects_expiry_overflow() {
        let err = VaultAccount::open(Pubkey::new_unique(), Pubkey::new_unique(), i64::MAX, 255, 1)
            .unwrap_err();
        assert_eq!(err, VaultError::Overflow.into());
    }

    #[test]
    fn negative_duration_is_born_expired() {
        let vault =
            VaultAccount::open(Pubkey::new_unique(), Pubkey::new_unique(), -5, 255, 100).unwrap();
        assert!(!vault.is_active(100));
        assert_eq!(vault.session_remaining(100), 0);
    }

    #[test]
    fn expiry_boundary_is_expired() {
        let vault = sample(0);
        assert!(vault.is_active(3_599));
        assert!(!vault.is_active(3_600));
        assert_eq!(vault.session_remaining(3_599), 1);
        assert_eq!(vault.session_remaining(3_600), 0);
    }

    #[test]
    fn trade_requires_recorded_session_key() {
        let mut vault = sample(0);
        let err = vault
            .record_trade(&Pubkey::new_unique(), 10, 2_000, 1)
            .unwrap_err();
        assert_eq!(err, VaultError::Unauthorized.into());
        assert_eq!(vault.position_size, 0);

        let key = vault.ephemeral_wallet;
        vault.record_trade(&key, -10, 2_000, 1).unwrap();
        assert_eq!((vault.position_size, vault.entry_price), (-10, 2_000));
    }

    #[test]
    fn trade_after_expiry_leaves_position_untouched() {
        let mut vault = sample(0);
        let key = vault.ephemeral_wallet;
        vault.record_trade(&key, 10, 2_000, 5).unwrap();

        let err = vault.record_trade(&key, 20, 2_100, 3_600).unwrap_err();
        assert_eq!(err, VaultError::SessionExpired.into());
        assert_eq!((vault.position_size, vault.entry_price), (10, 2_000));
    }

    #[test]
    fn revoke_only_moves_expiry_earlier() {
        let mut vault = sample(0);
        let parent = vault.parent_wallet;

        assert_eq!(vault.revoke(&parent, 10).unwrap(), 3_600);
        assert_eq!(vault.session_expires_at, 10);
        assert!(!vault.is_active(10));

        // A later revoke must not push the expiry forward again.
        assert_eq!(vault.revoke(&parent, 50).unwrap(), 10);
        assert_eq!(vault.session_expires_at, 10);
    }

    #[test]
    fn revoke_rejects_session_key() {
        let mut vault = sample(0);
        let key = vault.ephemeral_wallet;
        assert_eq!(
            vault.revoke(&key, 10).unwrap_err(),
            VaultError::Unauthorized.into()
        );
        assert!(vault.is_active(10));
    }

    #[test]
    fn stored_bump_must_reproduce_address() {
        let vault = sample(0);
        let (address, bump) = VaultAccount::derive_address(&vault.parent_wallet).unwrap();
        assert_eq!(vault.bump, bump);
        vault.verify_address(&address).unwrap();

        let other = Pubkey::new_unique();
        assert_eq!(
            vault.verify_address(&other).unwrap_err(),
            VaultError::InvalidVaultAddress.into()
        );

        let mut tampered = vault.clone();
        tampered.bump = tampered.bump.wrapping_sub(1);
        assert!(tampered.verify_address(&address).is_err());
    }

    #[test]
    fn pack_layout_is_fixed() {
        let vault = sample(7);
        let data = vault.pack().unwrap();
        assert_eq!(data.len(), VaultAccount::LEN);
        assert_eq!(&data[..DISCRIMINATOR_LEN], VaultAccount::DISCRIMINATOR);
        assert_eq!(&data[8..40], vault.parent_wallet.as_ref());
        assert_eq!(&data[40..72], vault.ephemeral_wallet.as_ref());
        assert_eq!(data[96], vault.bump);
        assert_eq!(VaultAccount::unpack(&data).unwrap(), vault);
    }

    #[test]
    fn unpack_rejects_foreign_discriminator() {
        let mut data = sample(0).pack().unwrap();
        data[0] ^= 0xff;
        assert_eq!(
            VaultAccount::unpack(&data).unwrap_err(),
            VaultError::InvalidAccountType.into()
        );
        assert_eq!(
            VaultAccount::unpack(&[1, 2, 3]).unwrap_err(),
            VaultError::InvalidAccountType.into()
        );
        assert_eq!(
            VaultAccount::unpack(&[]).unwrap_err(),
            VaultError::InvalidAccountType.into()
        );
    }

    #[test]
    fn unpack_rejects_wrong_length() {
        let data = sample(0).pack().unwrap();

        let truncated = &data[..data.len() - 1];
        assert_eq!(
            VaultAccount::unpack(truncated).unwrap_err(),
            VaultError::CorruptAccount.into()
        );

        let mut extended = data.clone();
        extended.push(0);
        assert_eq!(
            VaultAccount::unpack(&extended).unwrap_err(),
            VaultError::CorruptAccount.into()
        );
    }
}
