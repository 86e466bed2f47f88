//! Form submission trait

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Sink for new submissions on a remote form
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FormSubmitter: Send + Sync {
    /// Submit answers keyed by question id. Returns the submission id if the
    /// remote service reported one.
    async fn submit(
        &self,
        form_id: &str,
        fields: &Map<String, Value>,
    ) -> Result<Option<String>, DomainError>;
}
