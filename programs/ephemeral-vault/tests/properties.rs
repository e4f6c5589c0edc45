//! Property tests for vault address derivation and the record codec.

use anchor_lang::prelude::*;
use ephemeral_vault::{VaultAccount, VaultError};
use proptest::prelude::*;

fn arb_pubkey() -> impl Strategy<Value = Pubkey> {
    prop::array::uniform32(any::<u8>()).prop_map(Pubkey::new_from_array)
}

fn arb_vault() -> impl Strategy<Value = VaultAccount> {
    (
        arb_pubkey(),
        arb_pubkey(),
        any::<i64>(),
        any::<i64>(),
        any::<i64>(),
        any::<u8>(),
    )
        .prop_map(
            |(parent_wallet, ephemeral_wallet, session_expires_at, position_size, entry_price, bump)| {
                VaultAccount {
                    parent_wallet,
                    ephemeral_wallet,
                    session_expires_at,
                    position_size,
                    entry_price,
                    bump,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn derivation_is_deterministic_and_injective(a in arb_pubkey(), b in arb_pubkey()) {
        let (address_a, bump_a) = VaultAccount::derive_address(&a).unwrap();
        prop_assert_eq!(VaultAccount::derive_address(&a).unwrap(), (address_a, bump_a));
        prop_assert!(!address_a.is_on_curve());

        let (address_b, _) = VaultAccount::derive_address(&b).unwrap();
        if a != b {
            prop_assert_ne!(address_a, address_b);
        }
    }

    #[test]
    fn derived_bump_verifies_its_own_address(parent in arb_pubkey(), key in arb_pubkey()) {
        let (address, bump) = VaultAccount::derive_address(&parent).unwrap();
        let vault = VaultAccount::open(parent, key, 60, bump, 0).unwrap();
        prop_assert!(vault.verify_address(&address).is_ok());
    }

    #[test]
    fn codec_round_trips(vault in arb_vault()) {
        let data = vault.pack().unwrap();
        prop_assert_eq!(data.len(), VaultAccount::LEN);
        prop_assert_eq!(VaultAccount::unpack(&data).unwrap(), vault);
    }

    #[test]
    fn corrupted_discriminator_never_decodes(vault in arb_vault(), index in 0usize..8, flip in 1u8..=255) {
        let mut data = vault.pack().unwrap();
        data[index] ^= flip;
        prop_assert_eq!(
            VaultAccount::unpack(&data).unwrap_err(),
            anchor_lang::error::Error::from(VaultError::InvalidAccountType)
        );
    }

    #[test]
    fn trade_succeeds_iff_active_and_signed_by_session_key(
        expires_at in -1_000i64..1_000,
        now in -1_000i64..1_000,
        use_session_key in any::<bool>(),
    ) {
        let session_key = Pubkey::new_unique();
        let mut vault = VaultAccount {
            parent_wallet: Pubkey::new_unique(),
            ephemeral_wallet: session_key,
            session_expires_at: expires_at,
            ..VaultAccount::default()
        };
        let signer = if use_session_key { session_key } else { Pubkey::new_unique() };

        let result = vault.record_trade(&signer, 7, 11, now);
        prop_assert_eq!(result.is_ok(), use_session_key && now < expires_at);
        if result.is_err() {
            prop_assert_eq!(vault.position_size, 0);
        }
    }
}
