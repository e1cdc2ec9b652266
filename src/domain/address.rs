//! Deterministic model record addresses.

use solana_program::pubkey::Pubkey;

use crate::domain::hash::ModelHash;
use crate::error::ClientError;

/// Namespace tag shared with the on-chain program's PDA seeds.
pub const MODEL_SEED: &[u8] = b"model";

/// Derives the program-owned account address holding a model's record:
/// seeds = ["model", 32 raw hash bytes] under `program_id`.
///
/// Pure and stateless; identical inputs always yield the identical address
/// and bump. The exhausted case only occurs if no bump in the search space
/// lands off-curve, which is fatal and never retried.
pub fn derive_model_address(
    hash: &ModelHash,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), ClientError> {
    Pubkey::try_find_program_address(&[MODEL_SEED, hash.as_bytes()], program_id)
        .ok_or(ClientError::AddressDerivationExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let program_id = Pubkey::new_unique();
        let hash = ModelHash::parse(&"ab".repeat(32)).unwrap();

        let (addr_a, bump_a) = derive_model_address(&hash, &program_id).unwrap();
        let (addr_b, bump_b) = derive_model_address(&hash, &program_id).unwrap();
        assert_eq!(addr_a, addr_b);
        assert_eq!(bump_a, bump_b);
    }

    #[test]
    fn distinct_hashes_yield_distinct_addresses() {
        let program_id = Pubkey::new_unique();
        let first = ModelHash::parse(&"aa".repeat(32)).unwrap();
        let second = ModelHash::parse(&"bb".repeat(32)).unwrap();

        let (addr_a, _) = derive_model_address(&first, &program_id).unwrap();
        let (addr_b, _) = derive_model_address(&second, &program_id).unwrap();
        assert_ne!(addr_a, addr_b);
    }

    #[test]
    fn program_id_scopes_the_derivation() {
        let hash = ModelHash::parse(&"cc".repeat(32)).unwrap();
        let (addr_a, _) = derive_model_address(&hash, &Pubkey::new_unique()).unwrap();
        let (addr_b, _) = derive_model_address(&hash, &Pubkey::new_unique()).unwrap();
        assert_ne!(addr_a, addr_b);
    }
}
