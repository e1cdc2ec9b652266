//! Centralized configuration (explicit argument > environment variables > defaults).

use std::path::PathBuf;
use std::str::FromStr;

use solana_program::pubkey::Pubkey;

use crate::error::ClientError;

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8899";
const DEFAULT_WALLET_PATH: &str = "~/.config/solana/id.json";

/// Everything an operation needs before it can talk to the cluster.
///
/// Manifest discovery (reading a program id out of a deploy manifest) happens
/// upstream of this crate; the program id arrives here already resolved, as an
/// explicit argument or an environment variable.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub rpc_url: String,
    pub program_id: Pubkey,
    pub wallet_path: PathBuf,
}

impl ClientConfig {
    /// Resolves configuration with one precedence chain per value:
    ///
    /// - rpc url: `RPC_URL` env, else the local validator default
    /// - program id: explicit argument, else `PROGRAM_ID` env (no default)
    /// - wallet path: explicit argument, else `WALLET_PATH`, else
    ///   `SOLANA_WALLET`, else `~/.config/solana/id.json` (tilde-expanded)
    pub fn resolve(
        program_id_arg: Option<&str>,
        wallet_path_arg: Option<&str>,
    ) -> Result<Self, ClientError> {
        let rpc_url = std::env::var("RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());

        let program_id_raw = match program_id_arg {
            Some(v) => v.to_string(),
            None => std::env::var("PROGRAM_ID").map_err(|_| {
                ClientError::ConfigurationMissing(
                    "program_id not provided and PROGRAM_ID env not set".to_string(),
                )
            })?,
        };
        let program_id = Pubkey::from_str(&program_id_raw).map_err(|e| {
            ClientError::ConfigurationMissing(format!(
                "program id {} is not a valid pubkey: {}",
                program_id_raw, e
            ))
        })?;

        let wallet_raw = wallet_path_arg
            .map(str::to_string)
            .or_else(|| std::env::var("WALLET_PATH").ok())
            .or_else(|| std::env::var("SOLANA_WALLET").ok())
            .unwrap_or_else(|| DEFAULT_WALLET_PATH.to_string());
        let wallet_path = PathBuf::from(shellexpand::tilde(&wallet_raw).into_owned());

        Ok(Self {
            rpc_url,
            program_id,
            wallet_path,
        })
    }
}
