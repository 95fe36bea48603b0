//! Skill gap analysis: catalog lookup → scoring → report assembly.

pub mod handlers;
pub mod report;
pub mod scorer;

use tracing::debug;

use crate::catalog::{is_known_job, lookup_job};
use crate::models::skill::SkillRecord;
use self::report::{assemble, AnalysisReport};
use self::scorer::{score, UserSkillLevels};

/// Runs the full analysis for one user against the profile `job_title`
/// resolves to.
pub fn analyze(skills: &[SkillRecord], job_title: &str) -> AnalysisReport {
    let requirements = lookup_job(job_title);
    if !is_known_job(job_title) {
        debug!(
            "Unknown job title '{job_title}', using '{}' requirements",
            requirements.title
        );
    }

    let levels = UserSkillLevels::from_records(skills);
    assemble(job_title, requirements, score(&levels, requirements))
}
