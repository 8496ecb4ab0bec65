//! Warrior MCP Server entry point.
//!
//! Loads configuration, initializes logging on stderr (stdout carries the
//! MCP protocol in STDIO mode) and serves over the configured transport.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use warrior_mcp_server::core::{Config, McpServer, TransportConfig, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level, config.logging.with_timestamps);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!(
        "task binary: {}, taskrc: {}",
        config.taskwarrior.binary,
        config.taskwarrior.taskrc.display()
    );
    info!("timew binary: {}", config.timewarrior.binary);

    let server = McpServer::new(config.clone());
    info!("Server initialized with {} tools", server.tools().len());

    serve(server, config.transport).await?;

    info!("Server shutting down");

    Ok(())
}

/// Serve `server` until the transport finishes.
async fn serve(server: McpServer, transport: TransportConfig) -> warrior_mcp_server::Result<()> {
    TransportService::new(transport).run(server).await?;
    Ok(())
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` directives are honoured on top of the configured level.
fn init_logging(level: &str, with_timestamps: bool) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    if with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
