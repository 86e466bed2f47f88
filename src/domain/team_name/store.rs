//! Remote option store trait

use async_trait::async_trait;

use super::name::TeamName;
use crate::domain::DomainError;

/// Separator between options in the remote question field
pub const OPTION_DELIMITER: char = '|';

/// Remote store holding a question's option list as one delimited string
#[async_trait]
pub trait OptionStore: Send + Sync + std::fmt::Debug {
    /// Read the raw option string of a form question
    async fn get_options(&self, form_id: &str, question_id: &str) -> Result<String, DomainError>;

    /// Overwrite the option string of a form question
    async fn set_options(
        &self,
        form_id: &str,
        question_id: &str,
        options: &str,
    ) -> Result<(), DomainError>;
}

/// Decode a remote option string into a sorted, duplicate-free name list.
///
/// Entries are canonicalized on the way in. Only entries that canonicalize to
/// nothing (including the single empty entry of an empty string) are dropped,
/// so whatever survives is written back when a name is added.
pub fn decode_options(raw: &str) -> Vec<TeamName> {
    let mut names: Vec<TeamName> = raw
        .split(OPTION_DELIMITER)
        .filter_map(TeamName::from_stored)
        .collect();

    names.sort();
    names.dedup();
    names
}

/// Encode a name list as a remote option string
pub fn encode_options(names: &[TeamName]) -> String {
    names
        .iter()
        .map(TeamName::as_str)
        .collect::<Vec<_>>()
        .join(&OPTION_DELIMITER.to_string())
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// In-memory option store for testing
    #[derive(Debug, Default)]
    pub struct MockOptionStore {
        options: RwLock<HashMap<(String, String), String>>,
        fail_reads: AtomicBool,
        fail_writes: AtomicBool,
        writes: AtomicUsize,
    }

    impl MockOptionStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_options(form_id: &str, question_id: &str, options: &str) -> Self {
            let store = Self::new();
            store.put(form_id, question_id, options);
            store
        }

        /// Replace the stored value directly, bypassing the write counter
        pub fn put(&self, form_id: &str, question_id: &str, options: &str) {
            self.options.write().unwrap().insert(
                (form_id.to_string(), question_id.to_string()),
                options.to_string(),
            );
        }

        pub fn stored(&self, form_id: &str, question_id: &str) -> Option<String> {
            self.options
                .read()
                .unwrap()
                .get(&(form_id.to_string(), question_id.to_string()))
                .cloned()
        }

        pub fn set_fail_reads(&self, fail: bool) {
            self.fail_reads.store(fail, Ordering::SeqCst);
        }

        pub fn set_fail_writes(&self, fail: bool) {
            self.fail_writes.store(fail, Ordering::SeqCst);
        }

        pub fn write_count(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl OptionStore for MockOptionStore {
        async fn get_options(
            &self,
            form_id: &str,
            question_id: &str,
        ) -> Result<String, DomainError> {
            tokio::task::yield_now().await;

            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(DomainError::remote_unavailable("mock read failure"));
            }

            self.stored(form_id, question_id).ok_or_else(|| {
                DomainError::remote_unavailable(format!(
                    "Question '{}' of form '{}' not found",
                    question_id, form_id
                ))
            })
        }

        async fn set_options(
            &self,
            form_id: &str,
            question_id: &str,
            options: &str,
        ) -> Result<(), DomainError> {
            tokio::task::yield_now().await;

            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(DomainError::remote_write("mock write failure"));
            }

            self.put(form_id, question_id, options);
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }
}
