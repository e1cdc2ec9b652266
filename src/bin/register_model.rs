//! Registers a model's content hash on-chain.
//!
//! Usage:
//!   register_model <model_hash_hex> <storage_uri> <price_lamports> [wallet_path]
//! Env/optional args:
//!   WALLET_PATH / SOLANA_WALLET - keypair json (default: ~/.config/solana/id.json)
//!   PROGRAM_ID                  - registry program id (required)
//!   RPC_URL                     - rpc url (default: http://127.0.0.1:8899)
//!
//! Prints exactly one JSON object on stdout and exits 0 on success, 1 on
//! failure. `--debug` (or DEBUG_TRACE=1) traces progress on stderr.

use std::sync::Arc;

use model_registry_client::infra::config::ClientConfig;
use model_registry_client::report::{self, OperationResult};
use model_registry_client::{RegistryClient, RpcLedgerGateway};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let debug = std::env::args().any(|a| a == "--debug")
        || std::env::var("DEBUG_TRACE").as_deref() == Ok("1");
    let args: Vec<String> = std::env::args()
        .skip(1)
        .filter(|a| a != "--debug")
        .collect();

    if args.len() < 3 {
        report::exit_with(OperationResult::usage(
            "Usage: register_model <model_hash_hex> <storage_uri> <price_lamports> [wallet_path]",
        ));
    }
    let (hash, storage_uri, price) = (&args[0], &args[1], &args[2]);
    let wallet_arg = args.get(3).map(String::as_str);

    let config = match ClientConfig::resolve(None, wallet_arg) {
        Ok(c) => c,
        Err(e) => report::exit_with(OperationResult::failure(&e)),
    };
    if debug {
        eprintln!(
            "> register: rpc={} program={} wallet={}",
            config.rpc_url,
            config.program_id,
            config.wallet_path.display()
        );
    }

    let gateway = match RpcLedgerGateway::from_wallet_file(
        &config.rpc_url,
        &config.wallet_path,
        config.program_id,
    ) {
        Ok(g) => g,
        Err(e) => report::exit_with(OperationResult::failure(&e)),
    };

    let client = RegistryClient::new(Arc::new(gateway), config.program_id);
    let result = client.register(hash, storage_uri, price).await;
    report::exit_with(result);
}
