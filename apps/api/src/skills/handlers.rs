//! Axum route handlers for skill and target job management.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::errors::{AppError, AppJson};
use crate::models::skill::SkillRecord;
use crate::models::target_job::TargetJob;
use crate::skills::{merge_skill, SkillInput};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub success: bool,
    pub skills: Vec<SkillRecord>,
}

#[derive(Debug, Serialize)]
pub struct SkillChangeResponse {
    pub success: bool,
    pub message: String,
    pub skills: Vec<SkillRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetJobRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub required_skills: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetJobResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub target_job: Option<TargetJob>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/skills
pub async fn handle_list_skills(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<SkillsResponse>, AppError> {
    let profile = state.store.load_profile(user.user_id).await?;
    Ok(Json(SkillsResponse {
        success: true,
        skills: profile.skills,
    }))
}

/// POST /api/skills
///
/// Adds a skill, or updates the one with the same case-insensitive name.
pub async fn handle_add_skill(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<SkillInput>,
) -> Result<Json<SkillChangeResponse>, AppError> {
    let profile = state.store.load_profile(user.user_id).await?;
    let record = merge_skill(&profile.skills, input)?;
    let saved = state.store.save_skill(user.user_id, &record).await?;

    // added vs updated comes from the write, not the earlier read
    let message = if saved.updated {
        "Skill updated"
    } else {
        "Skill added"
    };
    Ok(Json(SkillChangeResponse {
        success: true,
        message: message.to_string(),
        skills: saved.skills,
    }))
}

/// DELETE /api/skills/:skill_name
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    user: AuthUser,
    Path(skill_name): Path<String>,
) -> Result<Json<SkillChangeResponse>, AppError> {
    let skills = state
        .store
        .remove_skill(user.user_id, &skill_name)
        .await?
        .ok_or_else(|| AppError::NotFound("Skill not found".to_string()))?;

    Ok(Json(SkillChangeResponse {
        success: true,
        message: "Skill removed".to_string(),
        skills,
    }))
}

/// GET /api/skills/target-job
pub async fn handle_get_target_job(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<TargetJobResponse>, AppError> {
    let profile = state.store.load_profile(user.user_id).await?;
    Ok(Json(TargetJobResponse {
        success: true,
        message: None,
        target_job: profile.target_job,
    }))
}

/// POST /api/skills/target-job
pub async fn handle_set_target_job(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(request): AppJson<TargetJobRequest>,
) -> Result<Json<TargetJobResponse>, AppError> {
    let title = request
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Validation("Job title is required".to_string()))?;

    let job = TargetJob {
        title: title.to_string(),
        industry: request.industry.unwrap_or_default(),
        required_skills: request.required_skills.unwrap_or_default(),
    };
    state.store.set_target_job(user.user_id, &job).await?;

    Ok(Json(TargetJobResponse {
        success: true,
        message: Some("Target job set successfully".to_string()),
        target_job: Some(job),
    }))
}
