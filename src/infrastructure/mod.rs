//! Infrastructure layer - External service implementations

pub mod jotform;
pub mod logging;
pub mod team_name;
