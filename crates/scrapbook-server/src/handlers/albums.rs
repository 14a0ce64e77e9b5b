//! Album handlers.

use crate::response::IndentedJson;
use crate::storage::seed;
use crate::types::Album;

/// The fixed album catalogue, in insertion order.
pub async fn list() -> IndentedJson<Vec<Album>> {
    IndentedJson(seed::albums())
}
