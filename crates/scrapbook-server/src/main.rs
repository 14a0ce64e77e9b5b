//! Scrapbook Server
//!
//! A small demo HTTP service: renders one templated HTML page, serves
//! hard-coded album data, database-backed user records, a posts list loaded
//! from a static JSON asset, and a directory of static files.

mod app;
mod config;
mod error;
mod handlers;
mod response;
mod storage;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use app::AppState;
use handlers::pages::PageTemplate;
use storage::{seed, Database};
use types::PageData;

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "Starting Scrapbook Server v{}",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    // Load configuration
    let config = config::load().context("Failed to load configuration")?;
    info!(
        "Config loaded: port={}, service={}, revision={}, database={}",
        config.port,
        config.service,
        config.revision,
        if config.dsn.is_some() { "yes" } else { "in-memory" }
    );

    // Open the user database if a DSN was provided; otherwise the service
    // answers /users from the seeded fallback list.
    let db = match &config.dsn {
        Some(dsn) => {
            let db = Database::new(dsn)
                .await
                .context("Failed to initialize database")?;
            Some(Arc::new(db))
        }
        None => None,
    };

    // Prepare the index page template.
    let page = PageTemplate::load(&config.template_path)
        .await
        .context("Failed to load index template")?;
    let page_data = PageData {
        service: config.service.clone(),
        revision: config.revision.clone(),
    };

    // Load posts.json once; immutable for the process lifetime.
    let posts_path = config.assets_dir.join("posts.json");
    let posts = seed::load_posts(&posts_path)
        .await
        .context("Failed to load posts asset")?;
    info!("Loaded {} posts from {}", posts.len(), posts_path.display());

    let state = AppState {
        db,
        page: Arc::new(page),
        page_data,
        posts: Arc::new(posts),
        fallback_users: Arc::new(seed::fallback_users()),
    };

    let router = app::build_router(state, &config.assets_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, router).await.context("Server error")?;

    Ok(())
}
