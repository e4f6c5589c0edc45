//! # Instruction Decoding
//!
//! The four vault operations as one closed enum, decoded from the same wire
//! bytes the Anchor entrypoint accepts: an 8-byte instruction discriminator
//! followed by the Borsh-encoded arguments.
//!
//! ```text
//! [ discriminator (8) | args (Borsh) ]
//!          ↓
//! VaultInstruction::unpack
//!          ↓
//! match { CreateEphemeralVault | DepositSol | PlaceTrade | RevokeSession }
//! ```

use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;
use anchor_lang::{Discriminator, InstructionData};

use crate::constants::DISCRIMINATOR_LEN;
use crate::instruction as ix;

/// A decoded vault instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaultInstruction {
    CreateEphemeralVault { session_duration: i64 },
    DepositSol { amount: u64 },
    PlaceTrade { size: i64, price: i64 },
    RevokeSession,
}

impl VaultInstruction {
    /// Decodes instruction data.
    ///
    /// ## Errors
    /// * `InstructionMissing` - fewer than 8 bytes
    /// * `InstructionFallbackNotFound` - unknown discriminator
    /// * `InstructionDidNotDeserialize` - arguments malformed or trailing bytes present
    pub fn unpack(data: &[u8]) -> Result<Self> {
        if data.len() < DISCRIMINATOR_LEN {
            return Err(ErrorCode::InstructionMissing.into());
        }
        let (tag, mut args) = data.split_at(DISCRIMINATOR_LEN);

        let instruction = if tag == ix::CreateEphemeralVault::DISCRIMINATOR {
            let decoded = ix::CreateEphemeralVault::deserialize(&mut args)
                .map_err(|_| ErrorCode::InstructionDidNotDeserialize)?;
            Self::CreateEphemeralVault {
                session_duration: decoded.session_duration,
            }
        } else if tag == ix::DepositSol::DISCRIMINATOR {
            let decoded = ix::DepositSol::deserialize(&mut args)
                .map_err(|_| ErrorCode::InstructionDidNotDeserialize)?;
            Self::DepositSol {
                amount: decoded.amount,
            }
        } else if tag == ix::PlaceTrade::DISCRIMINATOR {
            let decoded = ix::PlaceTrade::deserialize(&mut args)
                .map_err(|_| ErrorCode::InstructionDidNotDeserialize)?;
            Self::PlaceTrade {
                size: decoded.size,
                price: decoded.price,
            }
        } else if tag == ix::RevokeSession::DISCRIMINATOR {
            Self::RevokeSession
        } else {
            return Err(ErrorCode::InstructionFallbackNotFound.into());
        };

        require!(args.is_empty(), ErrorCode::InstructionDidNotDeserialize);
        Ok(instruction)
    }

    /// Encodes the instruction exactly as an Anchor client would.
    pub fn pack(&self) -> Vec<u8> {
        match *self {
            Self::CreateEphemeralVault { session_duration } => {
                ix::CreateEphemeralVault { session_duration }.data()
            }
            Self::DepositSol { amount } => ix::DepositSol { amount }.data(),
            Self::PlaceTrade { size, price } => ix::PlaceTrade { size, price }.data(),
            Self::RevokeSession => ix::RevokeSession {}.data(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateEphemeralVault { .. } => "create_ephemeral_vault",
            Self::DepositSol { .. } => "deposit_sol",
            Self::PlaceTrade { .. } => "place_trade",
            Self::RevokeSession => "revoke_session",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_anchor_client_bytes() {
        let data = ix::PlaceTrade {
            size: -10,
            price: 2_000,
        }
        .data();
        assert_eq!(
            VaultInstruction::unpack(&data).unwrap(),
            VaultInstruction::PlaceTrade {
                size: -10,
                price: 2_000
            }
        );

        let revoke = VaultInstruction::RevokeSession.pack();
        assert_eq!(revoke.len(), DISCRIMINATOR_LEN);
        assert_eq!(
            VaultInstruction::unpack(&revoke).unwrap(),
            VaultInstruction::RevokeSession
        );
    }

    #[test]
    fn discriminators_are_distinct() {
        let tags = [
            ix::CreateEphemeralVault::DISCRIMINATOR,
            ix::DepositSol::DISCRIMINATOR,
            ix::PlaceTrade::DISCRIMINATOR,
            ix::RevokeSession::DISCRIMINATOR,
        ];
        for (i, a) in tags.iter().enumerate() {
            assert_eq!(a.len(), DISCRIMINATOR_LEN);
            for b in &tags[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn rejects_short_data() {
        assert_eq!(
            VaultInstruction::unpack(&[0; 7]).unwrap_err(),
            ErrorCode::InstructionMissing.into()
        );
    }

    #[test]
    fn rejects_unknown_discriminator() {
        assert_eq!(
            VaultInstruction::unpack(&[0xAB; 16]).unwrap_err(),
            ErrorCode::InstructionFallbackNotFound.into()
        );
    }

    #[test]
    fn rejects_truncated_and_trailing_args() {
        let data = VaultInstruction::DepositSol { amount: 5 }.pack();
        assert_eq!(
            VaultInstruction::unpack(&data[..data.len() - 1]).unwrap_err(),
            ErrorCode::InstructionDidNotDeserialize.into()
        );

        let mut revoke = VaultInstruction::RevokeSession.pack();
        revoke.push(1);
        assert_eq!(
            VaultInstruction::unpack(&revoke).unwrap_err(),
            ErrorCode::InstructionDidNotDeserialize.into()
        );
    }
}
