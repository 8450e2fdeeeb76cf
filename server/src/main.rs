use clap::Parser;
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpService,
};

mod auth;
mod errors;
mod server;

use server::CourierServer;

/// Courier MCP server: outbound email with per-call pass-through credentials.
#[derive(Debug, Parser)]
#[command(name = "courier-server")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 3030)]
    port: u16,

    /// Path to a config file; defaults to /etc/courier/courier.toml
    #[arg(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() {
    env_logger::builder().format_timestamp_micros().init();

    let args = Args::parse();
    let settings = courier::config::load_config(args.config.as_deref());

    log::info!("Server initialized (pass-through authentication)");
    log::info!("Starting server at {}:{}...", args.host, args.port);

    let service = StreamableHttpService::new(
        move || Ok(CourierServer::new(&settings)),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let router = axum::Router::new().nest_service("/mcp", service);

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port))
        .await
        .expect("failed to bind listen address");

    axum::serve(listener, router).await.expect("server error");
}
