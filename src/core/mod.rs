pub mod context;
pub mod error;
pub mod response;

pub use context::{CorrelationId, RequestContext};
pub use error::{AppError, Result};
pub use response::ApiErrorResponse;
