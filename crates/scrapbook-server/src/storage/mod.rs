//! Storage layer
//!
//! Uses SQLite (embedded) for the users table; albums, posts and the
//! fallback user list are read-only in-memory seeds.

pub mod db;
pub mod seed;

pub use db::Database;
