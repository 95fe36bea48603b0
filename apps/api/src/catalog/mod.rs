//! Static lookup tables: job title → required skills, skill → learning resources.
//!
//! Both tables are compile-time constants. Every lookup goes through
//! [`normalize`] so the catalogs, the scorer and the skill store agree on
//! what "the same skill" means.

pub mod jobs;
pub mod resources;

pub use jobs::{is_known_job, known_jobs, lookup_job, JobProfile};
pub use resources::{resources_for, LearningResource};

/// Canonical matching key for skill names and job titles: trimmed, lowercased.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
