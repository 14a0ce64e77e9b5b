//! Shared data types.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user record, backed by the `users` table when a database is
/// configured. All fields default so `/decode` accepts partial bodies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub email: String,
    #[sqlx(rename = "first_name")]
    pub firstname: String,
    #[sqlx(rename = "last_name")]
    pub lastname: String,
    pub age: i64,
    pub payedvacation: i64,
}

/// A record album. Seeded in memory, never persisted or mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// One entry of the posts.json asset, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
}

/// Template variables for the index page.
#[derive(Debug, Clone)]
pub struct PageData {
    pub service: String,
    pub revision: String,
}
