use std::path::PathBuf;

use clap::Parser;

use cookiesync_core::{CryptoVariant, VERSION};

/// cookiesync - fetch and decrypt browser-cookie snapshots from a sync server
///
/// With no positional arguments the built-in defaults (or the config file)
/// are used. Supplying a server requires supplying the uuid and password too.
#[derive(Parser)]
#[command(name = "cookiesync")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Sync server base URL (e.g. http://your-server:8088)
    #[arg(value_name = "SERVER_URL", env = "COOKIESYNC_SERVER", requires = "uuid")]
    pub server_url: Option<String>,

    /// Client UUID the snapshot was uploaded under
    #[arg(value_name = "UUID", env = "COOKIESYNC_UUID", requires = "password")]
    pub uuid: Option<String>,

    /// Decryption password
    #[arg(value_name = "PASSWORD", env = "COOKIESYNC_PASSWORD")]
    pub password: Option<String>,

    /// Crypto variant (legacy | aes-128-cbc-fixed); overrides any server hint
    #[arg(value_name = "CRYPTO_TYPE")]
    pub crypto_type: Option<CryptoVariant>,

    /// Write the env file here instead of ./rsshub.env
    #[arg(long, value_name = "PATH", env = "COOKIESYNC_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    /// Config file (default: $XDG_CONFIG_HOME/cookiesync/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the decrypted snapshot as JSON and skip the env-file export
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
