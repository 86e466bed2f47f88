//! Team form forwarding service

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::domain::{DomainError, FormSubmitter};

/// Client message for a failed submission. The remote detail is only logged.
const SUBMIT_FAILED: &str = "Could not submit team form";

/// Forwards new-team form data to the remote "add team" form
pub struct TeamFormService {
    submitter: Arc<dyn FormSubmitter>,
    form_id: Option<String>,
}

impl std::fmt::Debug for TeamFormService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamFormService")
            .field("form_id", &self.form_id)
            .finish_non_exhaustive()
    }
}

impl TeamFormService {
    pub fn new(submitter: Arc<dyn FormSubmitter>, form_id: Option<String>) -> Self {
        Self { submitter, form_id }
    }

    /// Submit `data` (a JSON object of answers keyed by question id)
    pub async fn submit(&self, data: Value) -> Result<Option<String>, DomainError> {
        let form_id = self
            .form_id
            .as_deref()
            .ok_or_else(|| DomainError::configuration("No team form configured"))?;

        let fields = match data {
            Value::Object(fields) if !fields.is_empty() => fields,
            _ => return Err(DomainError::validation("No data supplied")),
        };

        info!(form_id = %form_id, fields = fields.len(), "Submitting team form");

        self.submitter
            .submit(form_id, &fields)
            .await
            .map_err(|e| match e {
                DomainError::Upstream { status, message } => {
                    warn!(
                        form_id = %form_id,
                        status,
                        error = %message,
                        "Team form submission failed"
                    );
                    DomainError::upstream(status, SUBMIT_FAILED)
                }
                other => other,
            })
    }
}
