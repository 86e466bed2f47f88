use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::{DomainError, FormSubmitter, OptionStore};

pub const DEFAULT_JOTFORM_BASE_URL: &str = "https://api.jotform.com";

const API_KEY_HEADER: &str = "APIKEY";

/// Standard JotForm response wrapper
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(rename = "responseCode")]
    response_code: Option<u16>,
    #[serde(default)]
    message: Option<String>,
    content: Option<T>,
}

#[derive(Debug, Deserialize)]
struct QuestionContent {
    #[serde(default)]
    options: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SubmissionContent {
    #[serde(rename = "submissionID", default)]
    submission_id: Option<Value>,
}

/// Failed call, before it is mapped to a domain error
#[derive(Debug)]
struct CallFailure {
    status: u16,
    message: String,
}

impl CallFailure {
    fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// JotForm REST API client.
///
/// Reads use the read-only key; writes and submissions need the read-write
/// key. Keys travel in the `APIKEY` header so they never show up in URLs.
#[derive(Clone)]
pub struct JotformClient {
    client: reqwest::Client,
    base_url: String,
    read_only_key: String,
    read_write_key: Option<String>,
}

impl std::fmt::Debug for JotformClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JotformClient")
            .field("base_url", &self.base_url)
            .field("read_write", &self.read_write_key.is_some())
            .finish_non_exhaustive()
    }
}

impl JotformClient {
    pub fn new(
        read_only_key: impl Into<String>,
        read_write_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        Self::with_base_url(DEFAULT_JOTFORM_BASE_URL, read_only_key, read_write_key, timeout)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        read_only_key: impl Into<String>,
        read_write_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            read_only_key: read_only_key.into(),
            read_write_key: read_write_key.filter(|key| !key.is_empty()),
        })
    }

    fn question_url(&self, form_id: &str, question_id: &str) -> String {
        format!("{}/form/{}/question/{}", self.base_url, form_id, question_id)
    }

    fn submissions_url(&self, form_id: &str) -> String {
        format!("{}/form/{}/submissions", self.base_url, form_id)
    }
}

async fn read_envelope<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<Option<T>, CallFailure> {
    let response = request.send().await.map_err(|e| {
        let status = if e.is_timeout() { 504 } else { 502 };
        CallFailure::new(status, format!("Request failed: {}", e))
    })?;

    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Envelope<Value>>(&body)
            .ok()
            .and_then(|envelope| envelope.message)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string());
        return Err(CallFailure::new(status.as_u16(), message));
    }

    let envelope: Envelope<T> = response
        .json()
        .await
        .map_err(|e| CallFailure::new(502, format!("Failed to parse response: {}", e)))?;

    if let Some(code) = envelope.response_code {
        if !(200..300).contains(&code) {
            return Err(CallFailure::new(
                code,
                envelope.message.unwrap_or_else(|| "error".to_string()),
            ));
        }
    }

    Ok(envelope.content)
}

/// Flatten answers into JotForm's `submission[...]` form fields.
///
/// `"3"` becomes `submission[3]`, `"5_first"` becomes `submission[5][first]`.
fn submission_fields(fields: &Map<String, Value>) -> Vec<(String, String)> {
    fields
        .iter()
        .map(|(key, value)| {
            let name = match key.split_once('_') {
                Some((question, sub_field)) => format!("submission[{}][{}]", question, sub_field),
                None => format!("submission[{}]", key),
            };

            let value = match value {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            };

            (name, value)
        })
        .collect()
}

#[async_trait]
impl OptionStore for JotformClient {
    async fn get_options(&self, form_id: &str, question_id: &str) -> Result<String, DomainError> {
        debug!(form_id = %form_id, question_id = %question_id, "Reading question options");

        let request = self
            .client
            .get(self.question_url(form_id, question_id))
            .header(API_KEY_HEADER, &self.read_only_key);

        let content: QuestionContent = read_envelope(request)
            .await
            .map_err(|f| {
                DomainError::remote_unavailable(format!("HTTP {}: {}", f.status, f.message))
            })?
            .ok_or_else(|| DomainError::remote_unavailable("Question response has no content"))?;

        Ok(content.options.unwrap_or_default())
    }

    async fn set_options(
        &self,
        form_id: &str,
        question_id: &str,
        options: &str,
    ) -> Result<(), DomainError> {
        let key = self
            .read_write_key
            .as_deref()
            .ok_or_else(|| DomainError::remote_write("No read-write API key configured"))?;

        debug!(
            form_id = %form_id,
            question_id = %question_id,
            bytes = options.len(),
            "Writing question options"
        );

        let request = self
            .client
            .post(self.question_url(form_id, question_id))
            .header(API_KEY_HEADER, key)
            .form(&[("question[options]", options)]);

        read_envelope::<Value>(request)
            .await
            .map_err(|f| DomainError::remote_write(format!("HTTP {}: {}", f.status, f.message)))?;

        Ok(())
    }
}

#[async_trait]
impl FormSubmitter for JotformClient {
    async fn submit(
        &self,
        form_id: &str,
        fields: &Map<String, Value>,
    ) -> Result<Option<String>, DomainError> {
        let key = self
            .read_write_key
            .as_deref()
            .ok_or_else(|| DomainError::configuration("No read-write API key configured"))?;

        let request = self
            .client
            .post(self.submissions_url(form_id))
            .header(API_KEY_HEADER, key)
            .form(&submission_fields(fields));

        let content: Option<SubmissionContent> = read_envelope(request)
            .await
            .map_err(|f| DomainError::upstream(f.status, f.message))?;

        Ok(content
            .and_then(|c| c.submission_id)
            .and_then(|id| match id {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            }))
    }
}
