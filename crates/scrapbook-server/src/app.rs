//! Application state and router construction.

use std::path::Path;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::handlers::pages::PageTemplate;
use crate::storage::Database;
use crate::types::{PageData, Post, User};

/// Application state shared across handlers. Everything here is built once
/// at startup; the slices are read-only for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub db: Option<Arc<Database>>,
    pub page: Arc<PageTemplate>,
    pub page_data: PageData,
    pub posts: Arc<Vec<Post>>,
    pub fallback_users: Arc<Vec<User>>,
}

pub fn build_router(state: AppState, assets_dir: &Path) -> Router {
    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/test", get(handlers::pages::test))
        .route("/albums", get(handlers::albums::list))
        .route("/users", get(handlers::users::list))
        .route("/user", get(handlers::users::get))
        .route(
            "/addUser",
            get(handlers::users::add).post(handlers::users::add),
        )
        .route(
            "/deleteUser",
            get(handlers::users::delete).post(handlers::users::delete),
        )
        .route("/secure", get(handlers::pages::secure))
        .route("/insecure", get(handlers::pages::insecure))
        .route("/decode", post(handlers::users::decode))
        .route("/encode", get(handlers::posts::encode))
        .route("/books/:title/page/:page", get(handlers::pages::book))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
