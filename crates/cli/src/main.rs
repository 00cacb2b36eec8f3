mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use pdarena_client::{ArenaClient, ClientConfig, default_api_url, default_config_path};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::commands::Context;

/// 未设置 `RUST_LOG` 时的日志级别。
const DEFAULT_LOG_FILTER: &str = "info";

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing()?;

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => match default_config_path() {
            Some(path) => ClientConfig::from_optional_file(path)?,
            None => ClientConfig::default(),
        },
    };

    if let Some(api_url) = &config.api_url {
        pdarena_client::set_default_api_url(api_url.clone())
            .context("failed to apply configured API url")?;
    }

    debug!(
        default_api_url = %default_api_url(),
        override_api_url = ?cli.api_url,
        "client configured"
    );

    let ctx = Context {
        client: ArenaClient::new(),
        server: cli.api_url,
        api_key: cli.api_key,
        credential_path: config.credential_path(),
    };

    let exit = commands::run(cli.command, &ctx).await?;
    info!("done");
    Ok(exit)
}

fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
