//! The rent operation: pay a registered model's listed price to its uploader.

use std::sync::Arc;

use solana_program::pubkey::Pubkey;

use crate::domain::address;
use crate::domain::hash::ModelHash;
use crate::domain::record::ModelRecord;
use crate::domain::request::TransactionRequest;
use crate::error::ClientError;
use crate::infra::solana::gateway::LedgerGateway;
use crate::report::OperationResult;

/// Orchestrates `rent`: validate, derive the record address, read the
/// existing record, build the rental transaction against its uploader,
/// submit, report.
pub struct RentalClient {
    gateway: Arc<dyn LedgerGateway>,
    program_id: Pubkey,
}

impl RentalClient {
    pub fn new(gateway: Arc<dyn LedgerGateway>, program_id: Pubkey) -> Self {
        Self {
            gateway,
            program_id,
        }
    }

    /// Rents the model registered under `raw_hash`. Never returns an error to
    /// the caller: every failure at every step ends up inside the returned
    /// result.
    pub async fn rent(&self, raw_hash: &str) -> OperationResult {
        match self.run(raw_hash).await {
            Ok(result) => result,
            Err(err) => OperationResult::failure(&err),
        }
    }

    async fn run(&self, raw_hash: &str) -> Result<OperationResult, ClientError> {
        let hash = ModelHash::parse(raw_hash)?;
        let (model_pda, _bump) = address::derive_model_address(&hash, &self.program_id)?;

        // Read-then-write: the rental instruction needs the uploader recorded
        // at registration time, so the record read must succeed before any
        // transaction is attempted.
        let account = self.gateway.read_account(&model_pda).await?;
        let record = ModelRecord::decode(&account.data)?;

        let renter = self.gateway.identity();
        let request = TransactionRequest::Rent {
            model: model_pda,
            renter,
            uploader: record.uploader,
            model_hash: hash,
        };

        let txid = self.gateway.submit(&request).await?;
        Ok(OperationResult::rented(
            &txid,
            &model_pda,
            &renter,
            &record.uploader,
        ))
    }
}
