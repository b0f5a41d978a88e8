//! Artifact persistence
//!
//! Durably writes fitted objects to named locations and reads them back.
//! The two pipeline artifacts (preprocessor, model) have independent
//! lifecycles: one write can succeed while the other fails, and callers that
//! need pair-wise consistency must check both results.

mod format;
mod load;
mod save;

pub use format::{ArtifactFormat, SaveConfig};
pub use load::load_artifact;
pub use save::save_artifact;
