//! JotForm API client
//!
//! Implements [`OptionStore`](crate::domain::OptionStore) over a form question's
//! option list and [`FormSubmitter`](crate::domain::FormSubmitter) over form
//! submissions.

mod client;

pub use client::{JotformClient, DEFAULT_JOTFORM_BASE_URL};
