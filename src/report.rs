//! The single output contract toward the backend orchestrator.
//!
//! Every invocation ends with exactly one JSON object on stdout; anything
//! human-readable goes to stderr. The backend pattern-matches on `success`
//! and persists `txid` / `model_pda` against its own model row, so those
//! field names are frozen.

use serde::Serialize;
use solana_program::pubkey::Pubkey;
use solana_sdk::signature::Signature;

use crate::error::ClientError;

/// Terminal artifact of a register or rent run.
#[derive(Debug, Serialize)]
pub struct OperationResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_pda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl OperationResult {
    fn success_base() -> Self {
        Self {
            success: true,
            txid: None,
            model_pda: None,
            program_id: None,
            wallet: None,
            renter: None,
            uploader: None,
            error: None,
            error_category: None,
            diagnostic: None,
        }
    }

    pub fn registered(
        txid: &Signature,
        model_pda: &Pubkey,
        program_id: &Pubkey,
        wallet: &Pubkey,
    ) -> Self {
        Self {
            txid: Some(txid.to_string()),
            model_pda: Some(model_pda.to_string()),
            program_id: Some(program_id.to_string()),
            wallet: Some(wallet.to_string()),
            ..Self::success_base()
        }
    }

    pub fn rented(
        txid: &Signature,
        model_pda: &Pubkey,
        renter: &Pubkey,
        uploader: &Pubkey,
    ) -> Self {
        Self {
            txid: Some(txid.to_string()),
            model_pda: Some(model_pda.to_string()),
            renter: Some(renter.to_string()),
            uploader: Some(uploader.to_string()),
            ..Self::success_base()
        }
    }

    /// Normalizes a structured failure. Remote detail (program logs, rpc
    /// error bodies, layout mismatch notes) goes into `diagnostic` so `error`
    /// stays a short, stable message.
    pub fn failure(err: &ClientError) -> Self {
        let (error, diagnostic) = match err {
            ClientError::SubmissionRejected { reason } => (
                "transaction rejected by the program".to_string(),
                Some(reason.clone()),
            ),
            ClientError::CorruptRecord(detail) => (
                "model account data does not match the expected layout".to_string(),
                Some(detail.clone()),
            ),
            ClientError::NetworkFailure(detail) => (
                "ledger rpc unreachable or timed out".to_string(),
                Some(detail.clone()),
            ),
            other => (other.to_string(), None),
        };
        Self {
            success: false,
            error: Some(error),
            error_category: Some(err.category().to_string()),
            diagnostic,
            ..Self::success_base()
        }
    }

    /// Usage errors carry no category; they come from the argument layer,
    /// not the taxonomy.
    pub fn usage(message: &str) -> Self {
        Self {
            success: false,
            error: Some(message.to_string()),
            ..Self::success_base()
        }
    }
}

/// Prints the result as one JSON line and terminates the process. This is
/// the only place in the crate that exits.
pub fn exit_with(result: OperationResult) -> ! {
    println!("{}", serde_json::to_string(&result).unwrap());
    std::process::exit(if result.success { 0 } else { 1 });
}
