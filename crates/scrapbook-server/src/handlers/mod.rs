//! HTTP handlers

pub mod albums;
pub mod pages;
pub mod posts;
pub mod users;
