pub mod auth;
pub mod logging;
pub mod response;

pub use auth::{require_token, AuthState, UNAUTHORIZED_MESSAGE};
pub use logging::log_request;
pub use response::{ApiResponse, ApiResult};
