//! Team name request and response bodies

use serde::{Deserialize, Serialize};

use crate::domain::{Availability, TeamName};

/// Body of `POST /teamnames`
#[derive(Debug, Clone, Deserialize)]
pub struct AddTeamNameRequest {
    pub teamname: String,
}

/// Canonical name echoed back after an add
#[derive(Debug, Clone, Serialize)]
pub struct TeamNameResponse {
    pub teamname: TeamName,
}

/// Availability of a single name; `available` is `"yes"` or `"no"`
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityResponse {
    pub teamname: TeamName,
    pub available: &'static str,
}

impl From<Availability> for AvailabilityResponse {
    fn from(availability: Availability) -> Self {
        Self {
            teamname: availability.team_name,
            available: if availability.available { "yes" } else { "no" },
        }
    }
}

/// Result of forwarding a team form
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub submission_id: Option<String>,
}
