//! Team name infrastructure module

mod form_service;
mod registry;

pub use form_service::TeamFormService;
pub use registry::{NameListLocation, NameRegistry};
