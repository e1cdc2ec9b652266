//! Typed decoding of the on-chain `Model` account.

use primitive_types::H256;
use solana_program::pubkey::Pubkey;

use crate::error::ClientError;
use crate::infra::solana::anchor;

/// Account state at a model record address, created by `create_model` and
/// read-only from this client's perspective.
///
/// On-chain layout after the 8-byte Anchor discriminator:
/// model_hash `[u8;32]`, merkle_root `[u8;32]`, storage_uri (u32-LE length
/// prefix + bytes), price_lamports u64-LE, uploader 32-byte pubkey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRecord {
    pub model_hash: [u8; 32],
    /// Content-integrity root; zero-filled at registration time until uploads
    /// carry a real root.
    pub merkle_root: H256,
    pub storage_uri: String,
    pub price_lamports: u64,
    pub uploader: Pubkey,
}

impl ModelRecord {
    /// Decodes raw account data against the known layout, failing on any
    /// mismatch rather than optimistically picking fields out of it.
    pub fn decode(data: &[u8]) -> Result<Self, ClientError> {
        if data.len() < 8 {
            return Err(corrupt("shorter than the account discriminator"));
        }
        if data[..8] != anchor::account_discriminator("Model") {
            return Err(corrupt("discriminator does not match the Model account"));
        }
        let mut rest = &data[8..];

        let model_hash: [u8; 32] = take_array(&mut rest, "model_hash")?;
        let merkle_root = H256::from(take_array::<32>(&mut rest, "merkle_root")?);
        let storage_uri = take_string(&mut rest)?;
        let price_lamports = u64::from_le_bytes(take_array(&mut rest, "price_lamports")?);
        let uploader = Pubkey::new_from_array(take_array(&mut rest, "uploader")?);

        // The account is allocated at a fixed size, so zero padding may follow
        // the last field; anything non-zero there is a layout mismatch.
        if rest.iter().any(|b| *b != 0) {
            return Err(corrupt("unexpected data after the uploader field"));
        }

        Ok(Self {
            model_hash,
            merkle_root,
            storage_uri,
            price_lamports,
            uploader,
        })
    }
}

fn corrupt(detail: &str) -> ClientError {
    ClientError::CorruptRecord(detail.to_string())
}

fn take_array<const N: usize>(rest: &mut &[u8], field: &str) -> Result<[u8; N], ClientError> {
    if rest.len() < N {
        return Err(corrupt(&format!("account data truncated at {}", field)));
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&rest[..N]);
    *rest = &rest[N..];
    Ok(out)
}

fn take_string(rest: &mut &[u8]) -> Result<String, ClientError> {
    let len = u32::from_le_bytes(take_array(rest, "storage_uri length")?) as usize;
    if rest.len() < len {
        return Err(corrupt("storage_uri length exceeds the account data"));
    }
    let uri = std::str::from_utf8(&rest[..len])
        .map_err(|_| corrupt("storage_uri is not valid utf-8"))?
        .to_string();
    *rest = &rest[len..];
    Ok(uri)
}

#[cfg(test)]
impl ModelRecord {
    /// Encodes a record in the on-chain layout (tests only).
    pub(crate) fn encode(&self) -> Vec<u8> {
        let mut data = anchor::account_discriminator("Model").to_vec();
        data.extend_from_slice(&self.model_hash);
        data.extend_from_slice(self.merkle_root.as_bytes());
        data.extend_from_slice(&(self.storage_uri.len() as u32).to_le_bytes());
        data.extend_from_slice(self.storage_uri.as_bytes());
        data.extend_from_slice(&self.price_lamports.to_le_bytes());
        data.extend_from_slice(self.uploader.as_ref());
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ModelRecord {
        ModelRecord {
            model_hash: [0x9f; 32],
            merkle_root: H256::zero(),
            storage_uri: "ipfs://QmExample".to_string(),
            price_lamports: 1_000_000,
            uploader: Pubkey::new_unique(),
        }
    }

    #[test]
    fn decodes_the_exact_layout() {
        let record = sample();
        let decoded = ModelRecord::decode(&record.encode()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn tolerates_trailing_zero_padding() {
        let record = sample();
        let mut data = record.encode();
        data.extend_from_slice(&[0u8; 64]);
        assert_eq!(ModelRecord::decode(&data).unwrap(), record);
    }

    #[test]
    fn rejects_trailing_garbage() {
        let mut data = sample().encode();
        data.push(7);
        assert!(matches!(
            ModelRecord::decode(&data),
            Err(ClientError::CorruptRecord(_))
        ));
    }

    #[test]
    fn rejects_wrong_discriminator() {
        let mut data = sample().encode();
        data[0] ^= 0xff;
        assert!(matches!(
            ModelRecord::decode(&data),
            Err(ClientError::CorruptRecord(_))
        ));
    }

    #[test]
    fn rejects_truncated_data() {
        let data = sample().encode();
        for cut in [0, 4, 8, 40, 72, data.len() - 1] {
            assert!(
                matches!(
                    ModelRecord::decode(&data[..cut]),
                    Err(ClientError::CorruptRecord(_))
                ),
                "cut at {} should fail",
                cut
            );
        }
    }

    #[test]
    fn rejects_oversized_uri_length_prefix() {
        let record = sample();
        let mut data = record.encode();
        // Inflate the length prefix past the available bytes.
        let len_offset = 8 + 32 + 32;
        data[len_offset..len_offset + 4].copy_from_slice(&u32::MAX.to_le_bytes());
        assert!(matches!(
            ModelRecord::decode(&data),
            Err(ClientError::CorruptRecord(_))
        ));
    }
}
