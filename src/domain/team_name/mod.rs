//! Team name domain module
//!
//! Team names live as the option list of a single question on a remote form.
//! Every name is canonicalized before it is stored or compared.

mod name;
mod store;
mod submission;

pub use name::{canonicalize, Availability, TeamName, TeamNameError};
pub use store::{decode_options, encode_options, OptionStore, OPTION_DELIMITER};
pub use submission::FormSubmitter;

#[cfg(test)]
pub use store::mock;
#[cfg(test)]
pub use submission::MockFormSubmitter;
