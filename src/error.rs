//! Failure taxonomy for registry operations.
//!
//! Every variant is terminal to the current invocation; nothing here is
//! retried. The reporter turns these into the JSON output contract, so each
//! variant carries a stable category string.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("model_hash_hex must be 64 hex chars (sha256 hex)")]
    MalformedHash,

    #[error("could not derive a program address for the model seeds")]
    AddressDerivationExhausted,

    #[error("model account not found on-chain for given hash")]
    AccountNotFound,

    #[error("model account data does not match the expected layout: {0}")]
    CorruptRecord(String),

    #[error("transaction rejected by the program: {reason}")]
    SubmissionRejected { reason: String },

    #[error("ledger rpc failure: {0}")]
    NetworkFailure(String),

    #[error("{0}")]
    ConfigurationMissing(String),
}

impl ClientError {
    /// Stable category name surfaced as `error_category` in the output
    /// contract. The backend matches on these strings.
    pub fn category(&self) -> &'static str {
        match self {
            ClientError::MalformedHash => "MalformedHash",
            ClientError::AddressDerivationExhausted => "AddressDerivationExhausted",
            ClientError::AccountNotFound => "AccountNotFound",
            ClientError::CorruptRecord(_) => "CorruptRecord",
            ClientError::SubmissionRejected { .. } => "SubmissionRejected",
            ClientError::NetworkFailure(_) => "NetworkFailure",
            ClientError::ConfigurationMissing(_) => "ConfigurationMissing",
        }
    }
}
