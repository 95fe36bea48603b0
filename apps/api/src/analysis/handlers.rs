//! Axum route handlers for the gap analysis API.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::analysis::analyze;
use crate::analysis::report::AnalysisReport;
use crate::auth::AuthUser;
use crate::catalog::{known_jobs, JobProfile};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: AnalysisReport,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub history: Vec<AnalysisReport>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct JobsResponse {
    pub success: bool,
    pub jobs: &'static [JobProfile],
}

/// GET /api/gaps/analyze
///
/// Scores the user's skills against their target job. Requires a target
/// job; an unrecognized title is scored against the default profile.
pub async fn handle_analyze(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let profile = state.store.load_profile(user.user_id).await?;

    let target = profile
        .target_job
        .filter(|job| !job.title.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Please set a target job first".to_string()))?;

    let analysis = analyze(&profile.skills, &target.title);
    info!(
        "Gap analysis for user {}: '{}' readiness {}% ({} gaps)",
        user.user_id, analysis.job_title, analysis.readiness_percentage, analysis.skills_with_gaps
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis,
    }))
}

/// GET /api/gaps/history
///
/// Reports are computed on demand and not stored, so history is always empty.
pub async fn handle_history(_user: AuthUser) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        success: true,
        history: Vec::new(),
        message: "Gap analyses are computed on demand and not stored".to_string(),
    })
}

/// GET /api/jobs
///
/// Lists the job titles the catalog recognizes and their requirements.
pub async fn handle_list_jobs() -> Json<JobsResponse> {
    Json(JobsResponse {
        success: true,
        jobs: known_jobs(),
    })
}
