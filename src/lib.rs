//! User Management Service Library
//!
//! CRUD over a single User entity backed by a document store, organised as
//! HTTP controller -> user service -> user repository.

pub mod app;
pub mod config;
pub mod core;
pub mod database;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use app::AppState;
pub use modules::users;
