//! cookiesync CLI - fetch and decrypt browser-cookie snapshots.
//!
//! Resolves inputs (arguments > config file > defaults), fetches the
//! encrypted envelope, decrypts it with the resolved crypto variant, prints
//! a per-domain cookie summary, and writes the env file for downstream
//! consumers.

mod cli;
mod config;
mod constants;
mod output;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cookiesync_core::crypto::decrypt_document;
use cookiesync_core::export::{write_env_file, EnvMapping};
use cookiesync_core::fetch::fetch_envelope;
use cookiesync_core::{CryptoVariant, SyncError};

use crate::cli::Cli;
use crate::config::CliConfig;
use crate::constants::{
    exit_codes, DEFAULT_ENV_FILE, DEFAULT_ENV_MAPPING, DEFAULT_PASSWORD, DEFAULT_SERVER_URL,
    DEFAULT_UUID,
};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        if let Some(SyncError::Padding | SyncError::Format(_)) = err.downcast_ref::<SyncError>() {
            eprintln!("Hint: likely a wrong password or crypto variant for this UUID.");
        }
        std::process::exit(exit_code_for(&err));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = config::load(cli.config.as_deref())?;

    let server_url = cli
        .server_url
        .clone()
        .or_else(|| config.server.url.clone())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
    let uuid = cli
        .uuid
        .clone()
        .or_else(|| config.server.uuid.clone())
        .unwrap_or_else(|| DEFAULT_UUID.to_string());
    let password = cli
        .password
        .clone()
        .or_else(|| config.server.password.clone())
        .unwrap_or_else(|| DEFAULT_PASSWORD.to_string());
    let explicit = explicit_variant(cli, &config)?;

    let envelope = fetch_envelope(&server_url, &uuid, explicit)?;
    let variant = CryptoVariant::resolve(explicit, envelope.variant_hint());
    tracing::debug!(%variant, "decrypting snapshot");

    let document = decrypt_document(variant, &envelope.encrypted, &uuid, &password)?;

    if cli.json {
        output::print_json(&document)?;
        return Ok(());
    }

    if !cli.quiet {
        println!(
            "Decrypted snapshot for {} ({} domain(s))",
            uuid,
            document.cookie_data.len()
        );
        println!();
        output::print_summary(&document);
    }

    let env_file = cli
        .env_file
        .clone()
        .or_else(|| config.export.env_file.clone().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE));
    let mapping = build_mapping(&config);

    let written = write_env_file(&env_file, &document, &mapping)?;
    if !cli.quiet {
        if written > 0 {
            println!("Wrote {} cookie variable(s) to {}", written, env_file.display());
        } else {
            println!(
                "No mapped domains in snapshot; {} not written",
                env_file.display()
            );
        }
    }

    Ok(())
}

/// Locally chosen variant: the positional argument wins over the config file.
fn explicit_variant(cli: &Cli, config: &CliConfig) -> anyhow::Result<Option<CryptoVariant>> {
    if let Some(variant) = cli.crypto_type {
        return Ok(Some(variant));
    }
    match &config.server.crypto_type {
        Some(raw) => {
            let variant = raw
                .parse::<CryptoVariant>()
                .map_err(|e| anyhow::anyhow!("Invalid crypto_type in config: {}", e))?;
            Ok(Some(variant))
        }
        None => Ok(None),
    }
}

/// Built-in site mapping plus any config-file additions.
fn build_mapping(config: &CliConfig) -> EnvMapping {
    let mut mapping: EnvMapping = DEFAULT_ENV_MAPPING.iter().copied().collect();
    for (domain, var) in &config.export.mapping {
        mapping.insert(domain, var);
    }
    mapping
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(sync_err) = err.downcast_ref::<SyncError>() {
        return match sync_err {
            SyncError::Transport(_) => exit_codes::TRANSPORT,
            SyncError::Encoding(_)
            | SyncError::Crypto(_)
            | SyncError::Padding
            | SyncError::Format(_) => exit_codes::DECRYPT_FAILED,
            SyncError::Io { .. } => 1,
        };
    }
    exit_codes::INVALID_INPUT
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
