//! REST boundary: axum server, request validation, outcome serialization.

mod config;
mod errors;
mod response;
mod server;
mod validation;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::{AppState, RestServer};
pub use validation::{parse_list_query, validate_create, validate_id, validate_patch, MAX_DESCRIPTION_LENGTH};
