//! Display client for the StudyPod API.
//!
//! Fetches the summaries once at startup and serves them as expandable cards.
//! Default: http://127.0.0.1:5173/

use tokio::net::TcpListener;
use studypod::{
    client::fetch::SummaryClient,
    client::viewer::{create_viewer_router, load_view, ViewerState},
    config::ViewerConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ViewerConfig::load()?;
    studypod::init_logging();

    let client = SummaryClient::new(config.api_base_url.clone());
    let view = load_view(&client).await;

    let app = create_viewer_router(ViewerState::new(view));
    let listener = TcpListener::bind(config.server_addr).await?;

    log::info!("Viewer listening on http://{}", config.server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
