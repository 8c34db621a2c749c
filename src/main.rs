use anyhow::Context;
use wellgraph::http::AppState;
use wellgraph::loader::source::open_source;
use wellgraph::{HttpServer, SocialGraph, WellgraphConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Wellgraph v{}", wellgraph::version());

    let config = WellgraphConfig::load().context("loading configuration")?;
    let source = open_source(&config.source, &config.loader).context("opening data source")?;

    let graph = SocialGraph::new(config.loader.clone());
    match graph.initialize(source.as_ref()).await {
        Ok(stats) => info!(
            "Loaded {} nodes and {} edges from {}",
            stats.node_count,
            stats.edge_count,
            source.name()
        ),
        Err(e) => {
            error!("Initial graph load failed: {}", e);
            return Err(e).context("initial graph load");
        }
    }

    let server = HttpServer::new(AppState { graph, source }, config.server);
    server.start().await.context("HTTP server")?;

    Ok(())
}
