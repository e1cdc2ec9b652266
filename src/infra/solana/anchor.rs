//! Anchor wire-format helpers.
//!
//! Anchor prefixes instruction data and account data with an 8-byte
//! discriminator derived from a namespaced sha256 preimage.

use sha2::{Digest, Sha256};

/// First 8 bytes of sha256("global:<method>"), prepended to instruction data.
pub fn instruction_discriminator(method: &str) -> [u8; 8] {
    sighash("global", method)
}

/// First 8 bytes of sha256("account:<name>"), prepended to account data.
pub fn account_discriminator(name: &str) -> [u8; 8] {
    sighash("account", name)
}

fn sighash(namespace: &str, name: &str) -> [u8; 8] {
    let mut hasher = Sha256::new();
    hasher.update(namespace.as_bytes());
    hasher.update(b":");
    hasher.update(name.as_bytes());
    let digest = hasher.finalize();
    let mut out = [0u8; 8];
    out.copy_from_slice(&digest[..8]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // Cross-checked against the IDL emitted by `anchor build`.
    #[test]
    fn known_discriminators() {
        assert_eq!(
            instruction_discriminator("create_model"),
            [212, 233, 41, 219, 130, 212, 212, 229]
        );
        assert_eq!(
            instruction_discriminator("rent_model"),
            [236, 0, 178, 91, 68, 217, 105, 29]
        );
        assert_eq!(
            account_discriminator("Model"),
            [152, 221, 247, 122, 185, 125, 223, 151]
        );
    }
}
