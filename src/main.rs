// ABOUTME: bvbrc-mcp binary - serves the BV-BRC tool catalog over MCP stdio.
// ABOUTME: Parses CLI/env configuration, installs logging, and runs the server loop.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use bvbrc_mcp::config::{DEFAULT_APP_SERVICE_URL, DEFAULT_WORKSPACE_URL};
use bvbrc_mcp::{BvbrcClient, ClientConfig, McpServer, Router};

const DEFAULT_LOG_FILTER: &str = "bvbrc_mcp=info";

#[derive(Parser, Debug)]
#[command(name = "bvbrc-mcp", version, about = "BV-BRC MCP server over stdio")]
struct CliArgs {
    /// JSON-RPC endpoint of the BV-BRC app service.
    #[arg(long, env = "BVBRC_APP_SERVICE_URL", default_value = DEFAULT_APP_SERVICE_URL)]
    app_service_url: String,

    /// JSON-RPC endpoint of the BV-BRC workspace service.
    #[arg(long, env = "BVBRC_WORKSPACE_URL", default_value = DEFAULT_WORKSPACE_URL)]
    workspace_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "BVBRC_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Log filter directive, e.g. `debug` or `bvbrc_mcp=trace`. Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,
}

impl CliArgs {
    fn client_config(&self) -> ClientConfig {
        ClientConfig::new()
            .with_app_service_url(&self.app_service_url)
            .with_workspace_url(&self.workspace_url)
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

fn init_logging(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present; token variables may live there.
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();
    init_logging(args.log_level.as_deref())?;

    let client = Arc::new(BvbrcClient::new(args.client_config())?);

    eprintln!("BV-BRC MCP Server v{}", env!("CARGO_PKG_VERSION"));
    if client.is_authenticated() {
        eprintln!("Authenticated: yes ({})", client.username());
    } else {
        eprintln!("Authenticated: no");
    }

    tracing::info!(
        app_service = %client.config().app_service_url,
        workspace = %client.config().workspace_url,
        "starting MCP server on stdio"
    );

    let server = McpServer::new(Router::new(client));
    server.run(tokio::io::stdin(), tokio::io::stdout()).await?;

    tracing::info!("server stopped");
    Ok(())
}
