use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spyfall::{
    AppConfig, AppState, DocumentStore, InMemoryDocumentStore, PostgresDocumentStore, RoleBook,
    Shuffler, SystemClock,
};

#[tokio::main]
async fn main() {
    // Missing .env is fine, the environment may already be set
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spyfall=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting spyfall game server");

    if let Err(message) = run(AppConfig::from_env()).await {
        error!(error = %message, "Server stopped");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), String> {
    let store: Arc<dyn DocumentStore> = match &config.database_url {
        Some(url) => {
            let store = PostgresDocumentStore::connect(url)
                .await
                .map_err(|e| e.to_string())?;
            store.ensure_schema().await.map_err(|e| e.to_string())?;
            store
                .spawn_change_listener()
                .await
                .map_err(|e| e.to_string())?;
            info!("Using PostgreSQL document store");
            Arc::new(store)
        }
        None => {
            info!("DATABASE_URL not set, using in-memory document store");
            Arc::new(InMemoryDocumentStore::new())
        }
    };

    let role_book = match &config.rolebook_path {
        Some(path) => RoleBook::load(path).map_err(|e| e.to_string())?,
        None => RoleBook::builtin_in(config.language),
    };
    info!(locations = role_book.len(), language = %config.language, "Role book ready");

    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(
        Arc::new(config),
        store,
        Arc::new(role_book),
        Arc::new(Shuffler::from_entropy()),
        Arc::new(SystemClock),
    );

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("failed to bind {}: {}", bind_addr, e))?;
    info!("Server running on http://{}", bind_addr);

    axum::serve(listener, spyfall::app(state))
        .await
        .map_err(|e| e.to_string())
}
