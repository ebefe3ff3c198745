//! HTTP API module for the vigência cost engine.
//!
//! This module exposes the two narrow contracts the surrounding application
//! consumes: the configuration lookup query (`GET /config-lookup`) and the
//! cost computation (`POST /compute`).

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ComputeRequest;
pub use response::{ApiError, ComputeResponse, LookupResponse};
pub use state::AppState;
