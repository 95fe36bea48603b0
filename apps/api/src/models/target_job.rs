use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The job a user is aiming for. `title` is resolved against the job
/// catalog at analysis time; `industry` and `required_skills` are
/// informational and do not affect scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetJob {
    pub title: String,
    pub industry: String,
    pub required_skills: Vec<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct TargetJobRow {
    pub title: String,
    pub industry: String,
    pub required_skills: Vec<String>,
}

impl From<TargetJobRow> for TargetJob {
    fn from(row: TargetJobRow) -> Self {
        TargetJob {
            title: row.title,
            industry: row.industry,
            required_skills: row.required_skills,
        }
    }
}
