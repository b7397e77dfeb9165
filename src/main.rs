//! easy-web3 command line.
//!
//! ```text
//! easy-web3 [--network NAME | --config FILE] [--rpc-url URL] <command>
//!
//!     info [--json]            version, host and license
//!     balance <ADDRESS>        balance in wei
//!     block-number             latest block height
//!     is-contract <ADDRESS>    true if code is deployed at ADDRESS
//!     keccak <TEXT>            Keccak-256 of TEXT
//!     split-sig <HEX>          r, s and v of a 65-byte signature
//!     recover <MSG> <HEX>      address that signed MSG
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use easy_web3::blockchain::{EthClient, Network, NetworkConfig, ProviderList};
use easy_web3::config::{load_config, AppConfig};
use easy_web3::{info, observability, signature};

#[derive(Parser)]
#[command(name = "easy-web3", version)]
#[command(about = "Work easier with Web3 from the command line", long_about = None)]
struct Cli {
    /// Network preset (mainnet, goerli, sepolia, local)
    #[arg(short, long)]
    network: Option<Network>,

    /// JSON-RPC endpoint, overrides the preset URL and any providers file
    #[arg(short = 'u', long, conflicts_with = "providers")]
    rpc_url: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON file with a `nodes` list of endpoints to fail over between
    #[arg(short, long)]
    providers: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version, platform and license
    Info {
        /// Print package information as JSON
        #[arg(long)]
        json: bool,
    },
    /// Balance of an address in wei
    Balance { address: String },
    /// Latest block number
    BlockNumber,
    /// Check whether an address holds contract code
    IsContract { address: String },
    /// Keccak-256 hash of a string
    Keccak { text: String },
    /// Split a signature into r, s and v
    SplitSig { signature: String },
    /// Recover the signer of a personal message
    Recover { message: String, signature: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let app_config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    let level = cli
        .log_level
        .as_deref()
        .unwrap_or(app_config.logging.level.as_str());
    observability::init_logging(level);

    match &cli.command {
        Commands::Info { json: true } => {
            println!("{}", serde_json::to_string_pretty(&info::package_info())?);
        }
        Commands::Info { json: false } => {
            println!("{}", info::banner());
            println!("{}", info::DESCRIPTION);
            println!("Repository: {}", info::REPOSITORY_URL);
            println!();
            println!("{}", info::license_banner());
        }
        Commands::Keccak { text } => {
            println!("{}", signature::keccak256_hex(text));
        }
        Commands::SplitSig { signature: sig } => {
            let parts = signature::split_signature(sig)?;
            println!("r: {}", parts.r);
            println!("s: {}", parts.s);
            println!("v: {}", parts.v);
        }
        Commands::Recover {
            message,
            signature: sig,
        } => {
            let address = signature::recover_signer_hex(message, sig)?;
            println!("{}", address);
        }
        Commands::Balance { address } => {
            let mut client = connect(&cli, &app_config).await?;
            let balance = client.get_balance(address).await;
            client.close();
            println!("{}", balance?);
        }
        Commands::BlockNumber => {
            let mut client = connect(&cli, &app_config).await?;
            let block = client.get_block_number().await;
            client.close();
            println!("{}", block?);
        }
        Commands::IsContract { address } => {
            let mut client = connect(&cli, &app_config).await?;
            let is_contract = client.is_contract_address(address).await;
            client.close();
            println!("{}", is_contract?);
        }
    }

    Ok(())
}

/// Resolve the network from flags and config, then connect.
async fn connect(cli: &Cli, app_config: &AppConfig) -> Result<EthClient, Box<dyn std::error::Error>> {
    let mut network: NetworkConfig = match cli.network {
        Some(preset) => preset.config(),
        None => app_config.network_config(),
    };
    if let Some(url) = &cli.rpc_url {
        network = network.with_url(url.clone());
    }

    let client = match providers_file(cli, app_config) {
        Some(path) => {
            let mut providers = ProviderList::from_file(&path)?;
            EthClient::connect_with_failover(network, &mut providers).await?
        }
        None => EthClient::connect(network).await?,
    };
    Ok(client)
}

/// Providers file to fail over between, if any.
///
/// An explicit `--rpc-url` pins a single endpoint, so a providers file from
/// the config is not used alongside it.
fn providers_file(cli: &Cli, app_config: &AppConfig) -> Option<PathBuf> {
    if cli.rpc_url.is_some() {
        return None;
    }
    cli.providers
        .clone()
        .or_else(|| app_config.providers_file.as_ref().map(PathBuf::from))
}
