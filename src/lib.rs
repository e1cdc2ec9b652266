pub mod app;
pub mod domain;
pub mod error;
pub mod infra;
pub mod report;

// Convenience re-exports (keeps call-sites clean)
pub use app::register::RegistryClient;
pub use app::rent::RentalClient;
pub use domain::address::derive_model_address;
pub use domain::hash::ModelHash;
pub use domain::record::ModelRecord;
pub use domain::request::TransactionRequest;
pub use error::ClientError;
pub use infra::solana::{LedgerGateway, RpcLedgerGateway};
pub use report::OperationResult;
