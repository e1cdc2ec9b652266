//! The register operation: record a model's content hash on-chain.

use std::sync::Arc;

use primitive_types::H256;
use solana_program::pubkey::Pubkey;

use crate::domain::address;
use crate::domain::hash::ModelHash;
use crate::domain::request::TransactionRequest;
use crate::error::ClientError;
use crate::infra::solana::gateway::LedgerGateway;
use crate::report::OperationResult;

/// Orchestrates `register`: validate, derive the record address, build the
/// registration transaction, submit, report.
pub struct RegistryClient {
    gateway: Arc<dyn LedgerGateway>,
    program_id: Pubkey,
}

impl RegistryClient {
    pub fn new(gateway: Arc<dyn LedgerGateway>, program_id: Pubkey) -> Self {
        Self {
            gateway,
            program_id,
        }
    }

    /// Registers `raw_hash` with its storage location and listed price.
    /// Never returns an error to the caller: every failure at every step ends
    /// up inside the returned result.
    pub async fn register(
        &self,
        raw_hash: &str,
        storage_uri: &str,
        raw_price: &str,
    ) -> OperationResult {
        match self.run(raw_hash, storage_uri, raw_price).await {
            Ok(result) => result,
            Err(err) => OperationResult::failure(&err),
        }
    }

    async fn run(
        &self,
        raw_hash: &str,
        storage_uri: &str,
        raw_price: &str,
    ) -> Result<OperationResult, ClientError> {
        let hash = ModelHash::parse(raw_hash)?;
        let price_lamports = coerce_price(raw_price);
        let (model_pda, _bump) = address::derive_model_address(&hash, &self.program_id)?;

        // No existence pre-check: a duplicate registration races at the
        // program, and its own rejection is surfaced verbatim.
        let uploader = self.gateway.identity();
        let request = TransactionRequest::Register {
            model: model_pda,
            uploader,
            model_hash: hash,
            // Placeholder until uploads carry a real content root.
            merkle_root: H256::zero(),
            storage_uri: storage_uri.to_string(),
            price_lamports,
        };

        let txid = self.gateway.submit(&request).await?;
        Ok(OperationResult::registered(
            &txid,
            &model_pda,
            &self.program_id,
            &uploader,
        ))
    }
}

/// Lenient price parsing kept for compatibility with existing callers:
/// anything that does not parse as a non-negative integer becomes 0.
pub fn coerce_price(raw: &str) -> u64 {
    raw.trim().parse::<u64>().unwrap_or(0)
}
