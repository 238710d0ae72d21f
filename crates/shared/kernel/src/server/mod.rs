//! HTTP plumbing shared by every slice: the application state, the JSON error
//! body and the system routes.

mod error;
mod health;
pub mod router;
mod state;

pub use error::{ApiError, ApiResult, ErrorBody, ErrorDetail, extract_json};
pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateErrorExt, ApiStateInner};
