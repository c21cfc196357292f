use tokio::net::TcpListener;
use studypod::{
    config::Config,
    api::routes::create_router,
    store::InMemoryStore,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::load()?;
    studypod::init_logging();

    let server_addr = config.server_addr;
    if config.openai_api_key.is_none() {
        log::warn!("OPENAI_API_KEY is not set; text conversion stays unavailable");
    }

    let app_state = AppState::new(config, InMemoryStore::seeded());
    let app = create_router(app_state);

    let listener = TcpListener::bind(server_addr).await?;

    log::info!("Server running on {}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
