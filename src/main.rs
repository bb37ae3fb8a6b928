use bookshelf_api::{
    adapters::system::{SystemClock, UuidIdGenerator},
    api::{handlers::AppState, router::create_router},
    application::book::{BookStore, ServiceDependencies},
    config::ServerConfig,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf_api=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Server configuration
    let config = ServerConfig::from_env().expect("Failed to read server configuration");

    // Initialize adapters
    let id_generator = Arc::new(UuidIdGenerator::new());
    let clock = Arc::new(SystemClock::new());

    // Create service dependencies
    let service_deps = ServiceDependencies {
        id_generator,
        clock,
    };

    // The collection starts empty and lives for the lifetime of the process
    let book_store = BookStore::new(service_deps);

    // Create application state
    let app_state = Arc::new(AppState { book_store });

    // Create router
    let app = create_router(app_state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on http://{}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
