// Users module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CreateUserResponse, User, UserSchema, UsersResponse};
pub use repositories::{DocumentUserRepository, UserRepository};
pub use services::{UserEventService, UserService};
