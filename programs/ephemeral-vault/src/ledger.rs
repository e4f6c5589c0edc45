//! # Vault Ledger
//!
//! A host-side stand-in for the runtime's account store: an explicit
//! `address -> account` map driven by the same state transitions as the
//! on-chain handlers, with the clock passed in by the caller.
//!
//! ## Why a ledger?
//!
//! ```text
//! On-chain:  runtime loads accounts → Anchor checks constraints → handler → runtime commits
//! Ledger:    load_vault (derive + decode + verify bump) → VaultAccount transition → commit
//! ```
//!
//! Each call is all-or-nothing: every check runs before the first write,
//! so a rejected instruction leaves the map exactly as it was.
//!
//! ## Example:
//!
//! ```rust,ignore
//! let mut ledger = VaultLedger::new();
//! ledger.airdrop(parent, 10 * LAMPORTS_PER_SOL)?;
//!
//! let accounts = VaultAccounts::new(parent, session_key, &[parent]);
//! ledger.create_ephemeral_vault(accounts, 3600, now)?;
//! ```

use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::errors::VaultError;
use crate::processor::VaultInstruction;
use crate::state::VaultAccount;

/// Lamports, owner and data held at one address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredAccount {
    pub lamports: u64,
    pub owner: Pubkey,
    pub data: Vec<u8>,
}

/// The accounts and signatures attached to one instruction.
#[derive(Debug, Clone, Copy)]
pub struct VaultAccounts<'a> {
    pub parent_wallet: Pubkey,
    /// Recorded at creation, must sign trades. Ignored by deposit and revoke.
    pub ephemeral_wallet: Pubkey,
    pub signers: &'a [Pubkey],
}

impl<'a> VaultAccounts<'a> {
    pub fn new(parent_wallet: Pubkey, ephemeral_wallet: Pubkey, signers: &'a [Pubkey]) -> Self {
        Self {
            parent_wallet,
            ephemeral_wallet,
            signers,
        }
    }

    fn require_signer(&self, key: &Pubkey) -> Result<()> {
        require!(self.signers.contains(key), VaultError::NotSigned);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct VaultLedger {
    accounts: BTreeMap<Pubkey, StoredAccount>,
}

impl VaultLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits a wallet with lamports from outside the program.
    pub fn airdrop(&mut self, wallet: Pubkey, lamports: u64) -> Result<()> {
        let account = self.accounts.entry(wallet).or_default();
        account.lamports = account
            .lamports
            .checked_add(lamports)
            .ok_or(VaultError::Overflow)?;
        Ok(())
    }

    pub fn lamports(&self, address: &Pubkey) -> u64 {
        self.accounts.get(address).map_or(0, |a| a.lamports)
    }

    pub fn account(&self, address: &Pubkey) -> Option<&StoredAccount> {
        self.accounts.get(address)
    }

    /// Overwrites raw account state, bypassing every check. Lets callers
    /// seed fixtures or simulate foreign writes.
    pub fn set_account(&mut self, address: Pubkey, account: StoredAccount) {
        self.accounts.insert(address, account);
    }

    /// Rent-exempt reserve charged to the parent when a vault is allocated.
    pub fn vault_rent() -> u64 {
        Rent::default().minimum_balance(VaultAccount::LEN)
    }

    /// Loads the vault of `parent_wallet`.
    ///
    /// The address is always re-derived here rather than taken from the
    /// caller, and the stored bump is re-checked against it on every load.
    pub fn load_vault(&self, parent_wallet: &Pubkey) -> Result<VaultAccount> {
        let (address, _) = VaultAccount::derive_address(parent_wallet)?;
        self.load_vault_at(&address)
    }

    fn load_vault_at(&self, address: &Pubkey) -> Result<VaultAccount> {
        let account = match self.accounts.get(address) {
            Some(account) if account.owner == crate::ID => account,
            _ => return err!(VaultError::VaultNotFound),
        };

        let vault = VaultAccount::unpack(&account.data)?;
        vault.verify_address(address)?;
        Ok(vault)
    }

    /// Decodes raw instruction data and executes it.
    pub fn process(&mut self, data: &[u8], accounts: VaultAccounts, now: i64) -> Result<()> {
        let instruction = VaultInstruction::unpack(data)?;
        self.execute(instruction, accounts, now)
    }

    pub fn execute(
        &mut self,
        instruction: VaultInstruction,
        accounts: VaultAccounts,
        now: i64,
    ) -> Result<()> {
        msg!("Instruction: {}", instruction.name());
        match instruction {
            VaultInstruction::CreateEphemeralVault { session_duration } => self
                .create_ephemeral_vault(accounts, session_duration, now)
                .map(|_| ()),
            VaultInstruction::DepositSol { amount } => self.deposit_sol(accounts, amount),
            VaultInstruction::PlaceTrade { size, price } => {
                self.place_trade(accounts, size, price, now)
            }
            VaultInstruction::RevokeSession => self.revoke_session(accounts, now),
        }
    }

    /// Allocates the vault and starts the session.
    ///
    /// Lamports already sitting at the vault address count toward rent,
    /// the parent pays only the shortfall.
    pub fn create_ephemeral_vault(
        &mut self,
        accounts: VaultAccounts,
        session_duration: i64,
        now: i64,
    ) -> Result<VaultAccount> {
        let parent = accounts.parent_wallet;
        accounts.require_signer(&parent)?;

        let (address, bump) = VaultAccount::derive_address(&parent)?;
        let existing = self.accounts.get(&address).cloned().unwrap_or_default();
        require!(existing.owner != crate::ID, VaultError::VaultAlreadyExists);

        let rent_due = Self::vault_rent().saturating_sub(existing.lamports);
        let parent_lamports = self.lamports(&parent);
        require!(parent_lamports >= rent_due, VaultError::InsufficientFunds);

        let vault = VaultAccount::open(parent, accounts.ephemeral_wallet, session_duration, bump, now)?;
        let data = vault.pack()?;
        let vault_lamports = existing
            .lamports
            .checked_add(rent_due)
            .ok_or(VaultError::Overflow)?;

        self.debit(parent, parent_lamports - rent_due);
        self.accounts.insert(
            address,
            StoredAccount {
                lamports: vault_lamports,
                owner: crate::ID,
                data,
            },
        );

        msg!(
            "Vault {} created for parent {}. Session key {} valid until {}",
            address,
            parent,
            vault.ephemeral_wallet,
            vault.session_expires_at
        );
        Ok(vault)
    }

    /// Moves `amount` lamports from the parent into the vault.
    /// Allowed whether or not the session is still active.
    pub fn deposit_sol(&mut self, accounts: VaultAccounts, amount: u64) -> Result<()> {
        let parent = accounts.parent_wallet;
        accounts.require_signer(&parent)?;
        require!(amount > 0, VaultError::InvalidAmount);

        let (address, _) = VaultAccount::derive_address(&parent)?;
        let vault = self.load_vault_at(&address)?;
        require_keys_eq!(vault.parent_wallet, parent, VaultError::Unauthorized);

        let parent_lamports = self.lamports(&parent);
        require!(parent_lamports >= amount, VaultError::InsufficientFunds);
        let vault_lamports = self
            .lamports(&address)
            .checked_add(amount)
            .ok_or(VaultError::Overflow)?;

        self.debit(parent, parent_lamports - amount);
        if let Some(account) = self.accounts.get_mut(&address) {
            account.lamports = vault_lamports;
        }

        msg!(
            "Deposited {} lamports into vault {}. Vault balance: {}",
            amount,
            address,
            vault_lamports
        );
        Ok(())
    }

    /// Overwrites the position on behalf of the session key.
    pub fn place_trade(
        &mut self,
        accounts: VaultAccounts,
        size: i64,
        price: i64,
        now: i64,
    ) -> Result<()> {
        let session_key = accounts.ephemeral_wallet;
        accounts.require_signer(&session_key)?;

        let (address, _) = VaultAccount::derive_address(&accounts.parent_wallet)?;
        let mut vault = self.load_vault_at(&address)?;
        vault.record_trade(&session_key, size, price, now)?;
        self.store_vault(&address, &vault)?;

        msg!(
            "Position on vault {} set to {} @ {} ({}s of session left)",
            address,
            size,
            price,
            vault.session_remaining(now)
        );
        Ok(())
    }

    /// Voids the session immediately.
    pub fn revoke_session(&mut self, accounts: VaultAccounts, now: i64) -> Result<()> {
        let parent = accounts.parent_wallet;
        accounts.require_signer(&parent)?;

        let (address, _) = VaultAccount::derive_address(&parent)?;
        let mut vault = self.load_vault_at(&address)?;
        vault.revoke(&parent, now)?;
        self.store_vault(&address, &vault)?;

        msg!(
            "Session for key {} on vault {} revoked",
            vault.ephemeral_wallet,
            address
        );
        Ok(())
    }

    fn store_vault(&mut self, address: &Pubkey, vault: &VaultAccount) -> Result<()> {
        let data = vault.pack()?;
        match self.accounts.get_mut(address) {
            Some(account) => {
                account.data = data;
                Ok(())
            }
            None => err!(VaultError::VaultNotFound),
        }
    }

    fn debit(&mut self, wallet: Pubkey, remaining: u64) {
        self.accounts.entry(wallet).or_default().lamports = remaining;
    }
}
