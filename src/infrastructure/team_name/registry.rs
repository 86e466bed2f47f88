//! Team name registry backed by a remote option store

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::domain::team_name::{decode_options, encode_options, OptionStore};
use crate::domain::{Availability, DomainError, TeamName};

/// Location of the name list on the remote service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameListLocation {
    pub form_id: String,
    pub question_id: String,
}

impl NameListLocation {
    pub fn new(form_id: impl Into<String>, question_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            question_id: question_id.into(),
        }
    }
}

/// Sorted cache of canonical team names mirrored from a remote option store.
///
/// Additions are serialized by `write_lock` and always start from a fresh
/// read of the remote list, so a name added by another writer between two
/// calls is never dropped. Readers see the cache through `cache`, whose value
/// is only ever replaced whole.
#[derive(Debug)]
pub struct NameRegistry<S: OptionStore> {
    store: Arc<S>,
    location: NameListLocation,
    cache: RwLock<Option<Vec<TeamName>>>,
    write_lock: Mutex<()>,
}

impl<S: OptionStore> NameRegistry<S> {
    /// Create a registry with an empty cache
    pub fn new(store: Arc<S>, location: NameListLocation) -> Self {
        Self {
            store,
            location,
            cache: RwLock::new(None),
            write_lock: Mutex::new(()),
        }
    }

    pub fn location(&self) -> &NameListLocation {
        &self.location
    }

    /// Reload the cache from the remote store. Returns the number of names.
    pub async fn refresh(&self) -> Result<usize, DomainError> {
        let _guard = self.write_lock.lock().await;

        let names = self.fetch().await?;
        let count = names.len();
        *self.cache.write().await = Some(names);

        info!(count, "Loaded team names");
        Ok(count)
    }

    /// Current sorted list of names
    pub async fn list_names(&self) -> Result<Vec<TeamName>, DomainError> {
        self.ensure_loaded().await?;

        self.cache.read().await.clone().ok_or_else(cache_unavailable)
    }

    /// Check whether the canonical form of `raw` is still free
    pub async fn is_available(&self, raw: &str) -> Result<Availability, DomainError> {
        let team_name = TeamName::parse(raw)?;
        self.ensure_loaded().await?;

        let cache = self.cache.read().await;
        let names = cache.as_ref().ok_or_else(cache_unavailable)?;
        let available = names.binary_search(&team_name).is_err();

        debug!(team_name = %team_name, available, "Checked team name availability");

        Ok(Availability {
            team_name,
            available,
        })
    }

    /// Canonicalize `raw`, insert it and persist the whole list
    pub async fn add_name(&self, raw: &str) -> Result<TeamName, DomainError> {
        let team_name = TeamName::parse(raw)?;
        let _guard = self.write_lock.lock().await;

        let current = self.fetch().await?;

        let position = match current.binary_search(&team_name) {
            Ok(_) => {
                *self.cache.write().await = Some(current);
                debug!(team_name = %team_name, "Rejected duplicate team name");
                return Err(DomainError::duplicate(format!(
                    "Team name {} is already in use.",
                    team_name
                )));
            }
            Err(position) => position,
        };

        let mut updated = current.clone();
        updated.insert(position, team_name.clone());

        if let Err(e) = self
            .store
            .set_options(
                &self.location.form_id,
                &self.location.question_id,
                &encode_options(&updated),
            )
            .await
        {
            warn!(error = %e, team_name = %team_name, "Failed to save team names");
            *self.cache.write().await = Some(current);
            return Err(DomainError::remote_write(
                "Could not save the list of team names",
            ));
        }

        let count = updated.len();
        *self.cache.write().await = Some(updated);

        info!(team_name = %team_name, count, "Added team name");
        Ok(team_name)
    }

    async fn ensure_loaded(&self) -> Result<(), DomainError> {
        if self.cache.read().await.is_some() {
            return Ok(());
        }

        debug!("Team name cache is empty, loading from remote store");
        self.refresh().await.map(|_| ())
    }

    async fn fetch(&self) -> Result<Vec<TeamName>, DomainError> {
        let raw = self
            .store
            .get_options(&self.location.form_id, &self.location.question_id)
            .await
            .map_err(|e| {
                warn!(
                    error = %e,
                    form_id = %self.location.form_id,
                    question_id = %self.location.question_id,
                    "Failed to read team names"
                );
                cache_unavailable()
            })?;

        Ok(decode_options(&raw))
    }
}

fn cache_unavailable() -> DomainError {
    DomainError::remote_unavailable("Cannot read current team names")
}
