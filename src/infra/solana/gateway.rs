//! Thin boundary around the Solana RPC endpoint.
//!
//! Everything the operation clients do against the cluster goes through the
//! `LedgerGateway` trait, so flows can be exercised against a scripted ledger
//! in tests. One gateway is constructed per invocation and owns that run's
//! signing key; the key material never leaves the process.

use async_trait::async_trait;
use solana_client::client_error::{ClientError as RpcClientError, ClientErrorKind};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_program::pubkey::Pubkey;
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    signature::Signature,
    signer::{
        keypair::{read_keypair_file, Keypair},
        Signer,
    },
    transaction::Transaction,
};
use std::path::Path;

use crate::domain::request::TransactionRequest;
use crate::error::ClientError;

#[async_trait]
pub trait LedgerGateway: Send + Sync {
    /// Signs with the locally loaded key, sends, and waits for the
    /// `confirmed` commitment level before returning.
    async fn submit(&self, request: &TransactionRequest) -> Result<Signature, ClientError>;

    /// Reads raw account state at `address`. A missing account is
    /// `AccountNotFound`, the expected failure path when renting a hash that
    /// was never registered.
    async fn read_account(&self, address: &Pubkey) -> Result<Account, ClientError>;

    /// Public identity of the locally loaded signing key. No network call.
    fn identity(&self) -> Pubkey;
}

/// Gateway over a real RPC endpoint.
pub struct RpcLedgerGateway {
    client: RpcClient,
    signer: Keypair,
    program_id: Pubkey,
}

impl RpcLedgerGateway {
    pub fn new(rpc_url: &str, signer: Keypair, program_id: Pubkey) -> Self {
        let client =
            RpcClient::new_with_commitment(rpc_url.to_string(), CommitmentConfig::confirmed());
        Self {
            client,
            signer,
            program_id,
        }
    }

    /// Loads the signing key from a keypair file (the JSON array format the
    /// Solana CLI writes).
    pub fn from_wallet_file(
        rpc_url: &str,
        wallet_path: &Path,
        program_id: Pubkey,
    ) -> Result<Self, ClientError> {
        let signer = read_keypair_file(wallet_path).map_err(|e| {
            ClientError::ConfigurationMissing(format!(
                "failed to read keypair file {}: {}",
                wallet_path.display(),
                e
            ))
        })?;
        Ok(Self::new(rpc_url, signer, program_id))
    }
}

#[async_trait]
impl LedgerGateway for RpcLedgerGateway {
    async fn submit(&self, request: &TransactionRequest) -> Result<Signature, ClientError> {
        let instruction = request.to_instruction(&self.program_id);
        let mut transaction =
            Transaction::new_with_payer(&[instruction], Some(&self.signer.pubkey()));

        let recent_blockhash = self
            .client
            .get_latest_blockhash()
            .await
            .map_err(network_failure)?;
        transaction.sign(&[&self.signer], recent_blockhash);

        self.client
            .send_and_confirm_transaction(&transaction)
            .await
            .map_err(submission_failure)
    }

    async fn read_account(&self, address: &Pubkey) -> Result<Account, ClientError> {
        let response = self
            .client
            .get_account_with_commitment(address, self.client.commitment())
            .await
            .map_err(network_failure)?;
        response.value.ok_or(ClientError::AccountNotFound)
    }

    fn identity(&self) -> Pubkey {
        self.signer.pubkey()
    }
}

fn network_failure(err: RpcClientError) -> ClientError {
    ClientError::NetworkFailure(err.to_string())
}

/// Splits submission failures into "the program said no" (duplicate
/// registration, insufficient funds, account mismatch) and "the endpoint is
/// unreachable or timed out".
fn submission_failure(err: RpcClientError) -> ClientError {
    if err.get_transaction_error().is_some() {
        return ClientError::SubmissionRejected {
            reason: err.to_string(),
        };
    }
    match err.kind() {
        ClientErrorKind::RpcError(_) => ClientError::SubmissionRejected {
            reason: err.to_string(),
        },
        _ => ClientError::NetworkFailure(err.to_string()),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Scripted in-memory ledger for client-flow tests.
    pub(crate) struct MockGateway {
        pub(crate) identity: Pubkey,
        pub(crate) accounts: HashMap<Pubkey, Account>,
        pub(crate) reject_with: Option<String>,
        pub(crate) submitted: Mutex<Vec<TransactionRequest>>,
    }

    impl MockGateway {
        pub(crate) fn new() -> Self {
            Self {
                identity: Pubkey::new_unique(),
                accounts: HashMap::new(),
                reject_with: None,
                submitted: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn with_account(mut self, address: Pubkey, data: Vec<u8>) -> Self {
            self.accounts.insert(
                address,
                Account {
                    lamports: 1_000_000,
                    data,
                    owner: Pubkey::new_unique(),
                    executable: false,
                    rent_epoch: 0,
                },
            );
            self
        }

        pub(crate) fn submissions(&self) -> Vec<TransactionRequest> {
            self.submitted.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LedgerGateway for MockGateway {
        async fn submit(&self, request: &TransactionRequest) -> Result<Signature, ClientError> {
            self.submitted.lock().unwrap().push(request.clone());
            match &self.reject_with {
                Some(reason) => Err(ClientError::SubmissionRejected {
                    reason: reason.clone(),
                }),
                None => Ok(Signature::new_unique()),
            }
        }

        async fn read_account(&self, address: &Pubkey) -> Result<Account, ClientError> {
            self.accounts
                .get(address)
                .cloned()
                .ok_or(ClientError::AccountNotFound)
        }

        fn identity(&self) -> Pubkey {
            self.identity
        }
    }
}
