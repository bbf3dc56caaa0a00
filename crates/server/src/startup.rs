use std::{env, net::SocketAddr, path::Path};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, ServerState};
use configs::AppConfig;
use models::{product::Product, user::User};
use service::{
    catalog::CatalogService, runtime, storage::json_list_store::JsonListStore,
    users::UserDirectory,
};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

// the demo frontend is served from another origin, so stay permissive
fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load config from config.toml, falling back to env vars with defaults.
fn load_config() -> AppConfig {
    match AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            let path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
            if Path::new(&path).exists() {
                warn!(config = %path, error = %e, "config file present but unusable; falling back to env/defaults");
            }
            let mut cfg = AppConfig::default();
            if let Ok(host) = env::var("SERVER_HOST") {
                cfg.server.host = host;
            }
            if let Some(port) = env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
                cfg.server.port = port;
            }
            cfg.storage.normalize_from_env();
            cfg
        }
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = load_config();
    runtime::ensure_env(Path::new(&cfg.storage.data_dir), &cfg.storage.images_dir()).await?;

    // Record stores, one JSON file each
    let users_store = JsonListStore::<User>::new(cfg.storage.users_path()).await?;
    let products_store = JsonListStore::<Product>::new(cfg.storage.products_path()).await?;

    let state = ServerState {
        users: UserDirectory::new(users_store),
        catalog: CatalogService::new(products_store),
        images_dir: cfg.storage.images_dir(),
    };

    // Build router
    let app: Router = routes::build_router(state, build_cors());

    // Bind and serve
    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting server crate");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
