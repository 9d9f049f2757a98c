//! HTTP API module for the activity calendar generator.
//!
//! This module exposes company generation over HTTP (`POST /generate`).

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{GenerateRequest, MAX_EMPLOYEES};
pub use response::{ApiError, EmployeeView, GenerateResponse, GenerationSummary, PeriodView};
pub use state::AppState;
