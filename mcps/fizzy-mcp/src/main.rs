//! fizzy-mcp binary: serve the Fizzy tools over stdio
//!
//! Requires `FIZZY_BASE_URL`, `FIZZY_ACCOUNT_ID` and `FIZZY_ACCESS_TOKEN`,
//! either in the environment or in the TOML file passed with `--config`.

use std::path::PathBuf;

use clap::Parser;
use rmcp::ServiceExt;

use fizzy_mcp::{Config, FizzyClient, FizzyMcpServer};

#[derive(Parser, Debug)]
#[command(name = "fizzy-mcp", version, about = "MCP server for the Fizzy API")]
struct Args {
    /// Optional TOML file with base_url, account_id and access_token
    #[arg(long, env = "FIZZY_CONFIG_PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    mcp_common::init_tracing("fizzy_mcp")?;

    let config = Config::load(args.config.as_deref())?;
    tracing::info!(
        base_url = %config.base_url,
        account_id = %config.account_id,
        "Starting fizzy_mcp MCP Server"
    );

    let server = FizzyMcpServer::new(FizzyClient::new(config)?);
    let service = server.serve(rmcp::transport::stdio()).await?;

    tracing::info!("Server running, waiting for requests...");

    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
