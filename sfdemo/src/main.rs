use std::fs::File;

use sf_axum::{router_with_schema, start_server};
use sfdemo::{AppConfig, Cli, impls::DemoApp};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Every crate in the workspace reports through `tracing`, so install a
    // subscriber that writes those events to stdio, filtered by RUST_LOG.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::import()?;

    // Create config with proper layering of CLI args
    let AppConfig { server, catalog } = AppConfig::load(&cli)?;

    let app = DemoApp::load(&catalog)?;

    // If requested, dump the schema and exit.
    if let Some(path) = cli.schema {
        let schema = router_with_schema(app, server).1;
        serde_json::to_writer_pretty(File::create(path)?, &schema)?;
        return Ok(());
    }

    start_server(server, app).await?;

    Ok(())
}
