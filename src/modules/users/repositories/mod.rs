pub mod user_repository;

pub use user_repository::{DocumentUserRepository, UserRepository, USERS_COLLECTION};
