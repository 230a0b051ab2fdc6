// Test Helper Modules
//
// Shared infrastructure for the unit, contract and integration suites.
// Controller tests run against closure-driven mock services; flow tests run
// the full application over the in-memory document store.
//
// Usage (from a test target):
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;

#![allow(dead_code)]

pub mod assertions;
pub mod test_server;

// Re-export commonly used types and functions
pub use assertions::*;
pub use mocks::*;
pub use test_data::*;
pub use test_server::*;
