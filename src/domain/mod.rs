//! Domain layer - Core business logic and entities

pub mod error;
pub mod team_name;

pub use error::DomainError;
pub use team_name::{
    canonicalize, decode_options, encode_options, Availability, FormSubmitter, OptionStore,
    TeamName, TeamNameError,
};
