mod user;
mod user_schema;

pub use user::{CreateUserResponse, User, UsersResponse};
pub use user_schema::UserSchema;
