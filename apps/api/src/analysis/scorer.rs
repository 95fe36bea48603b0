//! Gap scorer: compares a user's self-rated levels with a job profile.
//!
//! Pure and total. A user with no skills gets 0% readiness and every
//! requirement listed as a gap; nothing here can fail.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{normalize, resources_for, JobProfile, LearningResource};
use crate::models::skill::SkillRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// gap ≥ 2 → high, gap == 1 → medium, otherwise low.
    ///
    /// The scorer only classifies entries with gap ≥ 1, so `Low` never
    /// appears in a report. It stays in the enum for clients that match on it.
    pub fn classify(gap: u8) -> Self {
        if gap >= 2 {
            Priority::High
        } else if gap == 1 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessLevel {
    #[serde(rename = "Ready")]
    Ready,
    #[serde(rename = "Almost Ready")]
    AlmostReady,
    #[serde(rename = "Getting There")]
    GettingThere,
    #[serde(rename = "Needs Work")]
    NeedsWork,
    #[serde(rename = "Beginner")]
    Beginner,
}

impl ReadinessLevel {
    pub fn from_percentage(pct: u8) -> Self {
        match pct {
            80.. => ReadinessLevel::Ready,
            60..=79 => ReadinessLevel::AlmostReady,
            40..=59 => ReadinessLevel::GettingThere,
            20..=39 => ReadinessLevel::NeedsWork,
            _ => ReadinessLevel::Beginner,
        }
    }
}

/// One required skill the user falls short on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapEntry {
    pub skill: String,
    pub current_level: u8, // 0 when the user has no record of the skill
    pub required_level: u8,
    pub gap: u8, // always ≥ 1
    pub priority: Priority,
    pub resources: Vec<LearningResource>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub gaps: Vec<GapEntry>,
    pub total_gap_score: u32,
    pub critical_gaps: u32,
    pub readiness_percentage: u8, // 0-100
}

/// Normalized skill name → self-rated level.
///
/// Built from a profile's records; when two records normalize to the same
/// key the later one wins.
#[derive(Debug, Clone, Default)]
pub struct UserSkillLevels(HashMap<String, u8>);

impl UserSkillLevels {
    pub fn from_records(records: &[SkillRecord]) -> Self {
        records
            .iter()
            .map(|r| (r.name.as_str(), r.level))
            .collect()
    }

    pub fn level_of(&self, skill_name: &str) -> u8 {
        self.0.get(&normalize(skill_name)).copied().unwrap_or(0)
    }
}

impl<S: AsRef<str>> FromIterator<(S, u8)> for UserSkillLevels {
    fn from_iter<I: IntoIterator<Item = (S, u8)>>(iter: I) -> Self {
        UserSkillLevels(
            iter.into_iter()
                .map(|(name, level)| (normalize(name.as_ref()), level))
                .collect(),
        )
    }
}

/// Scores `user` against `requirements`, walking the requirement list in
/// order.
///
/// Readiness credits each skill with at most its required level:
/// `round(100 × Σ min(user, required) / Σ required)`.
pub fn score(user: &UserSkillLevels, requirements: &JobProfile) -> ScoreResult {
    let mut gaps = Vec::new();
    let mut total_gap_score = 0_u32;
    let mut critical_gaps = 0_u32;
    let mut earned_points = 0_u32;

    for required in requirements.required_skills {
        let user_level = user.level_of(required.name);
        let gap = required.level.saturating_sub(user_level);
        earned_points += u32::from(user_level.min(required.level));

        if gap > 0 {
            let priority = Priority::classify(gap);
            if gap >= 2 {
                critical_gaps += 1;
            }
            total_gap_score += u32::from(gap);
            gaps.push(GapEntry {
                skill: required.name.to_string(),
                current_level: user_level,
                required_level: required.level,
                gap,
                priority,
                resources: resources_for(required.name),
            });
        }
    }

    ScoreResult {
        gaps,
        total_gap_score,
        critical_gaps,
        readiness_percentage: readiness_percentage(
            earned_points,
            requirements.total_required_points(),
        ),
    }
}

/// Rounds half up, matching the usual `Math.round` semantics for
/// non-negative ratios.
fn readiness_percentage(earned: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (200 * earned + total) / (2 * total);
    pct.min(100) as u8
}
