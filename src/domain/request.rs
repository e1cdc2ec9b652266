//! Unsubmitted registry instructions and their wire encoding.

use primitive_types::H256;
use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

use crate::domain::hash::ModelHash;
use crate::infra::solana::anchor;

/// A fully-specified instruction that has not been sent yet: operation kind,
/// ordered account roles and typed arguments.
#[derive(Debug, Clone)]
pub enum TransactionRequest {
    Register {
        model: Pubkey,
        uploader: Pubkey,
        model_hash: ModelHash,
        merkle_root: H256,
        storage_uri: String,
        price_lamports: u64,
    },
    Rent {
        model: Pubkey,
        renter: Pubkey,
        uploader: Pubkey,
        model_hash: ModelHash,
    },
}

impl TransactionRequest {
    /// Instruction name as the program declares it.
    pub fn method(&self) -> &'static str {
        match self {
            TransactionRequest::Register { .. } => "create_model",
            TransactionRequest::Rent { .. } => "rent_model",
        }
    }

    /// Lowers the request into a Solana instruction: the Anchor method
    /// discriminator followed by Borsh-encoded arguments, with the account
    /// list in the order the program declares it.
    pub fn to_instruction(&self, program_id: &Pubkey) -> Instruction {
        match self {
            TransactionRequest::Register {
                model,
                uploader,
                model_hash,
                merkle_root,
                storage_uri,
                price_lamports,
            } => {
                let accounts = vec![
                    AccountMeta::new(*model, false),
                    AccountMeta::new(*uploader, true),
                    AccountMeta::new_readonly(system_program::ID, false),
                ];

                // create_model discriminator: [212, 233, 41, 219, 130, 212, 212, 229]
                let mut data = anchor::instruction_discriminator("create_model").to_vec();
                data.extend_from_slice(model_hash.as_bytes());
                data.extend_from_slice(merkle_root.as_bytes());
                data.extend_from_slice(&(storage_uri.len() as u32).to_le_bytes());
                data.extend_from_slice(storage_uri.as_bytes());
                data.extend_from_slice(&price_lamports.to_le_bytes());

                Instruction {
                    program_id: *program_id,
                    accounts,
                    data,
                }
            }
            TransactionRequest::Rent {
                model,
                renter,
                uploader,
                model_hash,
            } => {
                let accounts = vec![
                    AccountMeta::new(*model, false),
                    AccountMeta::new(*renter, true),
                    AccountMeta::new(*uploader, false),
                    AccountMeta::new_readonly(system_program::ID, false),
                ];

                // rent_model discriminator: [236, 0, 178, 91, 68, 217, 105, 29]
                let mut data = anchor::instruction_discriminator("rent_model").to_vec();
                data.extend_from_slice(model_hash.as_bytes());

                Instruction {
                    program_id: *program_id,
                    accounts,
                    data,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_instruction_layout() {
        let program_id = Pubkey::new_unique();
        let model = Pubkey::new_unique();
        let uploader = Pubkey::new_unique();
        let hash = ModelHash::parse(&"aa".repeat(32)).unwrap();

        let request = TransactionRequest::Register {
            model,
            uploader,
            model_hash: hash,
            merkle_root: H256::zero(),
            storage_uri: "ipfs://X".to_string(),
            price_lamports: 1_000_000,
        };
        let ix = request.to_instruction(&program_id);

        assert_eq!(ix.program_id, program_id);
        assert_eq!(ix.accounts.len(), 3);
        assert_eq!(ix.accounts[0].pubkey, model);
        assert!(ix.accounts[0].is_writable && !ix.accounts[0].is_signer);
        assert_eq!(ix.accounts[1].pubkey, uploader);
        assert!(ix.accounts[1].is_writable && ix.accounts[1].is_signer);
        assert_eq!(ix.accounts[2].pubkey, system_program::ID);
        assert!(!ix.accounts[2].is_writable && !ix.accounts[2].is_signer);

        assert_eq!(&ix.data[..8], &[212, 233, 41, 219, 130, 212, 212, 229]);
        assert_eq!(&ix.data[8..40], &[0xaa; 32]);
        assert_eq!(&ix.data[40..72], &[0u8; 32]);
        assert_eq!(&ix.data[72..76], &8u32.to_le_bytes());
        assert_eq!(&ix.data[76..84], b"ipfs://X");
        assert_eq!(&ix.data[84..], &1_000_000u64.to_le_bytes());
    }

    #[test]
    fn rent_instruction_layout() {
        let program_id = Pubkey::new_unique();
        let model = Pubkey::new_unique();
        let renter = Pubkey::new_unique();
        let uploader = Pubkey::new_unique();
        let hash = ModelHash::parse(&"bb".repeat(32)).unwrap();

        let request = TransactionRequest::Rent {
            model,
            renter,
            uploader,
            model_hash: hash,
        };
        let ix = request.to_instruction(&program_id);

        assert_eq!(ix.accounts.len(), 4);
        assert_eq!(ix.accounts[0].pubkey, model);
        assert_eq!(ix.accounts[1].pubkey, renter);
        assert!(ix.accounts[1].is_signer);
        assert_eq!(ix.accounts[2].pubkey, uploader);
        assert!(ix.accounts[2].is_writable && !ix.accounts[2].is_signer);
        assert_eq!(ix.accounts[3].pubkey, system_program::ID);

        assert_eq!(&ix.data[..8], &[236, 0, 178, 91, 68, 217, 105, 29]);
        assert_eq!(&ix.data[8..], &[0xbb; 32]);
    }
}
