//! Post handlers.

use axum::extract::State;

use crate::app::AppState;
use crate::response::IndentedJson;
use crate::types::Post;

/// The posts list loaded from the static asset at startup.
pub async fn encode(State(state): State<AppState>) -> IndentedJson<Vec<Post>> {
    IndentedJson(state.posts.as_ref().clone())
}
