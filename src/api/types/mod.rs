//! API request, response and error types

pub mod error;
pub mod json;
pub mod team_names;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use team_names::{
    AddTeamNameRequest, AvailabilityResponse, SubmissionResponse, TeamNameResponse,
};
