//! Team Name Registry API
//!
//! Lets a public web page register team names into a JotForm question's
//! option list without holding the JotForm API keys:
//! - Canonical team names (trimmed, sanitized, title-cased)
//! - Duplicate-safe, serialized additions against the remote list
//! - Availability checks and team form forwarding

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::{info, warn};

use api::state::AppState;
use infrastructure::jotform::JotformClient;
use infrastructure::team_name::{NameListLocation, NameRegistry, TeamFormService};

/// Build the JotForm client described by `config`
pub fn create_jotform_client(config: &AppConfig) -> anyhow::Result<Arc<JotformClient>> {
    config.jotform.validate()?;

    let client = JotformClient::with_base_url(
        &config.jotform.base_url,
        &config.jotform.read_only_api_key,
        config.jotform.read_write_api_key.clone(),
        config.jotform.timeout(),
    )?;

    Ok(Arc::new(client))
}

/// Build the registry over the configured team name question
pub fn create_registry(
    config: &AppConfig,
    client: Arc<JotformClient>,
) -> NameRegistry<JotformClient> {
    NameRegistry::new(
        client,
        NameListLocation::new(
            &config.jotform.registration_form_id,
            &config.jotform.team_name_question_id,
        ),
    )
}

/// Create the application state and load the initial name list.
///
/// A failed initial load is not fatal; the list is loaded again on first use.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let client = create_jotform_client(config)?;
    let registry = Arc::new(create_registry(config, client.clone()));

    if config.jotform.read_write_api_key.is_none() {
        warn!("No read-write JotForm API key configured; additions will fail");
    }

    let location = registry.location();
    match registry.refresh().await {
        Ok(count) => info!(
            count,
            form_id = %location.form_id,
            question_id = %location.question_id,
            "Team name registry ready"
        ),
        Err(e) => warn!(error = %e, "Initial team name load failed; retrying on first request"),
    }

    let team_form_service = TeamFormService::new(client, config.jotform.add_team_form_id.clone());

    Ok(AppState {
        team_name_service: registry,
        team_form_service: Arc::new(team_form_service),
    })
}
