use serde::{Deserialize, Serialize};

use crate::analysis::scorer::{GapEntry, Priority, ReadinessLevel, ScoreResult};
use crate::catalog::JobProfile;

/// Gap analysis returned to clients. Rebuilt on every request, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub job_title: String,
    pub total_skills_required: usize,
    pub skills_with_gaps: usize,
    pub critical_gaps: u32,
    pub total_gap_score: u32,
    pub readiness_percentage: u8,
    pub readiness_level: ReadinessLevel,
    pub gaps: Vec<GapEntry>,
    pub recommendations: Vec<String>,
}

/// Packages a score into a report. `job_title` is echoed as the user typed it,
/// even when the catalog fell back to the default profile.
pub fn assemble(job_title: &str, requirements: &JobProfile, score: ScoreResult) -> AnalysisReport {
    let recommendations = build_recommendations(&score.gaps, score.readiness_percentage);

    AnalysisReport {
        job_title: job_title.to_string(),
        total_skills_required: requirements.required_skills.len(),
        skills_with_gaps: score.gaps.len(),
        critical_gaps: score.critical_gaps,
        total_gap_score: score.total_gap_score,
        readiness_percentage: score.readiness_percentage,
        readiness_level: ReadinessLevel::from_percentage(score.readiness_percentage),
        gaps: score.gaps,
        recommendations,
    }
}

fn build_recommendations(gaps: &[GapEntry], readiness_percentage: u8) -> Vec<String> {
    if gaps.is_empty() {
        return vec![
            "Excellent! You have all required skills.".to_string(),
            "Consider adding advanced skills to stand out.".to_string(),
        ];
    }

    let mut recommendations = Vec::new();

    let high = gaps.iter().filter(|g| g.priority == Priority::High).count();
    let medium = gaps.iter().filter(|g| g.priority == Priority::Medium).count();

    if high > 0 {
        recommendations.push(format!("Focus on {high} high-priority skills first."));
    }
    if medium > 0 {
        recommendations.push(format!("Work on {medium} medium-priority skills."));
    }

    let next_step = if readiness_percentage < 50 {
        "Consider taking online courses for foundational skills."
    } else if readiness_percentage < 75 {
        "Build projects to practice your skills."
    } else {
        "Prepare for interviews and update your portfolio."
    };
    recommendations.push(next_step.to_string());

    recommendations
}
