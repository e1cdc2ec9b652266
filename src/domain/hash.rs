//! Model content hashes (sha256 over the uploaded asset).

use crate::error::ClientError;

/// The sole identity of a model record: exactly 32 raw bytes, externally
/// represented as 64 hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelHash([u8; 32]);

impl ModelHash {
    /// Parses the external hex form. Only strings of exactly 64 hex
    /// characters (either case) are accepted; anything else is
    /// `MalformedHash`, never truncated or padded.
    pub fn parse(raw: &str) -> Result<Self, ClientError> {
        if raw.len() != 64 || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ClientError::MalformedHash);
        }
        let bytes = hex::decode(raw).map_err(|_| ClientError::MalformedHash)?;
        // The character check already guarantees 32 bytes; re-assert on the
        // decoded length because the seed bytes must never be produced from a
        // character count alone.
        if bytes.len() != 32 {
            return Err(ClientError::MalformedHash);
        }
        let mut out = [0u8; 32];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex form (the canonical external representation).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}
