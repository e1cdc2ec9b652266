pub mod anchor;
pub mod gateway;

pub use gateway::{LedgerGateway, RpcLedgerGateway};
