//! Connectivity and deployment checks for the registry client.
//!
//! Human-facing tool; unlike the operation binaries it prints freely to
//! stdout and does not emit the JSON contract.

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::signer::keypair::read_keypair_file;
use solana_sdk::signer::Signer;

use model_registry_client::domain::address::derive_model_address;
use model_registry_client::domain::record::ModelRecord;
use model_registry_client::infra::config::ClientConfig;
use model_registry_client::ModelHash;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [model_hash_hex]\n\
         \n\
         Requires env vars:\n\
           PROGRAM_ID (RPC_URL optional, defaults to the local validator)\n\
         And a Solana payer key:\n\
           WALLET_PATH / SOLANA_WALLET / ~/.config/solana/id.json\n\
         \n\
         With a model hash argument, also reports the hash's record address\n\
         and whether a record exists there.\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") || args.len() > 1 {
        usage_and_exit();
    }

    let config = ClientConfig::resolve(None, None)?;

    println!("> Preflight:");
    println!("  RPC_URL={}", config.rpc_url);
    println!("  PROGRAM_ID={}", config.program_id);
    println!("  wallet={}", config.wallet_path.display());

    let payer = read_keypair_file(&config.wallet_path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", config.wallet_path.display(), e))?;

    let client =
        RpcClient::new_with_commitment(config.rpc_url.clone(), CommitmentConfig::confirmed());

    // Basic RPC connectivity
    let version = client.get_version().await?;
    println!("  RPC version: {}", version.solana_core);

    // Payer balance
    let balance_lamports = client.get_balance(&payer.pubkey()).await?;
    let sol = balance_lamports as f64 / 1_000_000_000_f64;
    println!("  Payer: {}", payer.pubkey());
    println!(
        "  Payer balance: {} lamports (~{:.6} SOL)",
        balance_lamports, sol
    );
    if balance_lamports < 10_000_000 {
        eprintln!("  Warning: payer balance looks low; transactions may fail.");
    }

    // Program account existence
    let program_acct = client.get_account(&config.program_id).await.map_err(|e| {
        anyhow::anyhow!(
            "Program account not found on cluster: {} ({})",
            config.program_id,
            e
        )
    })?;
    if !program_acct.executable {
        eprintln!("  Warning: program account exists but is not marked executable.");
    } else {
        println!("  Program account is deployed + executable.");
    }

    // Optional: where would this hash live, and is anything there?
    if let Some(raw_hash) = args.first() {
        let hash = ModelHash::parse(raw_hash)
            .map_err(|e| anyhow::anyhow!("model hash argument: {}", e))?;
        let (pda, bump) = derive_model_address(&hash, &config.program_id)?;
        println!("  Model record PDA: {} (bump {})", pda, bump);

        match client
            .get_account_with_commitment(&pda, client.commitment())
            .await?
            .value
        {
            Some(account) => {
                let record = ModelRecord::decode(&account.data)?;
                println!("  Record exists:");
                println!("    uploader: {}", record.uploader);
                println!("    price_lamports: {}", record.price_lamports);
                println!("    storage_uri: {}", record.storage_uri);
            }
            None => println!("  No record at that address (hash not registered)."),
        }
    }

    println!("> Preflight OK.");
    Ok(())
}
