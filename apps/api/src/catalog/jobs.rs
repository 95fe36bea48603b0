use serde::Serialize;

use super::normalize;

/// A single (skill, required level) pair in a job profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredSkill {
    pub name: &'static str,
    pub level: u8,
}

/// Fixed requirement list for one job title. Order is significant: gap
/// reports list skills in this order.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobProfile {
    pub title: &'static str,
    pub required_skills: &'static [RequiredSkill],
}

impl JobProfile {
    /// Sum of all required levels, the denominator of the readiness score.
    pub fn total_required_points(&self) -> u32 {
        self.required_skills.iter().map(|s| u32::from(s.level)).sum()
    }
}

const fn req(name: &'static str, level: u8) -> RequiredSkill {
    RequiredSkill { name, level }
}

/// Profile returned for any title that is not in the catalog.
pub const DEFAULT_JOB_TITLE: &str = "full stack developer";

const JOB_PROFILES: &[JobProfile] = &[
    JobProfile {
        title: "frontend developer",
        required_skills: &[
            req("HTML", 4),
            req("CSS", 4),
            req("JavaScript", 4),
            req("React", 3),
            req("Git", 3),
            req("Problem Solving", 4),
            req("Communication", 3),
        ],
    },
    JobProfile {
        title: "backend developer",
        required_skills: &[
            req("Node.js", 4),
            req("Express", 4),
            req("MongoDB", 3),
            req("REST API", 4),
            req("Git", 3),
            req("Problem Solving", 4),
            req("Database Design", 3),
        ],
    },
    JobProfile {
        title: DEFAULT_JOB_TITLE,
        required_skills: &[
            req("HTML", 4),
            req("CSS", 4),
            req("JavaScript", 4),
            req("React", 3),
            req("Node.js", 4),
            req("Express", 4),
            req("MongoDB", 3),
            req("Git", 4),
            req("Problem Solving", 4),
        ],
    },
    JobProfile {
        title: "data analyst",
        required_skills: &[
            req("Python", 4),
            req("SQL", 4),
            req("Excel", 4),
            req("Data Visualization", 3),
            req("Statistics", 3),
            req("Critical Thinking", 4),
        ],
    },
];

fn find(title: &str) -> Option<&'static JobProfile> {
    let key = normalize(title);
    JOB_PROFILES.iter().find(|p| p.title == key)
}

fn default_profile() -> &'static JobProfile {
    // DEFAULT_JOB_TITLE is one of the JOB_PROFILES literals above.
    JOB_PROFILES
        .iter()
        .find(|p| p.title == DEFAULT_JOB_TITLE)
        .unwrap_or(&JOB_PROFILES[0])
}

/// Resolves a job title to its requirement profile.
///
/// Matching is case-insensitive and exact. Unrecognized titles silently
/// get the full stack developer profile; this never fails.
pub fn lookup_job(title: &str) -> &'static JobProfile {
    find(title).unwrap_or_else(default_profile)
}

/// True if `title` resolves to its own profile rather than the fallback.
pub fn is_known_job(title: &str) -> bool {
    find(title).is_some()
}

pub fn known_jobs() -> &'static [JobProfile] {
    JOB_PROFILES
}
