//! Application state for shared services

use std::sync::Arc;

use crate::domain::{Availability, DomainError, OptionStore, TeamName};
use crate::infrastructure::team_name::{NameRegistry, TeamFormService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub team_name_service: Arc<dyn TeamNameServiceTrait>,
    pub team_form_service: Arc<TeamFormService>,
}

/// Trait for team name registry operations
#[async_trait::async_trait]
pub trait TeamNameServiceTrait: Send + Sync {
    async fn list_names(&self) -> Result<Vec<TeamName>, DomainError>;
    async fn is_available(&self, raw: &str) -> Result<Availability, DomainError>;
    async fn add_name(&self, raw: &str) -> Result<TeamName, DomainError>;
    async fn refresh(&self) -> Result<usize, DomainError>;
}

#[async_trait::async_trait]
impl<S: OptionStore + 'static> TeamNameServiceTrait for NameRegistry<S> {
    async fn list_names(&self) -> Result<Vec<TeamName>, DomainError> {
        NameRegistry::list_names(self).await
    }

    async fn is_available(&self, raw: &str) -> Result<Availability, DomainError> {
        NameRegistry::is_available(self, raw).await
    }

    async fn add_name(&self, raw: &str) -> Result<TeamName, DomainError> {
        NameRegistry::add_name(self, raw).await
    }

    async fn refresh(&self) -> Result<usize, DomainError> {
        NameRegistry::refresh(self).await
    }
}
