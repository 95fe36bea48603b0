pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::analysis::handlers as gaps;
use crate::resume::handlers as resume;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/jobs", get(gaps::handle_list_jobs))
        // Skills
        .route(
            "/api/skills",
            get(skills::handle_list_skills).post(skills::handle_add_skill),
        )
        .route(
            "/api/skills/target-job",
            get(skills::handle_get_target_job).post(skills::handle_set_target_job),
        )
        .route("/api/skills/:skill_name", delete(skills::handle_remove_skill))
        // Gap analysis
        .route("/api/gaps/analyze", get(gaps::handle_analyze))
        .route("/api/gaps/history", get(gaps::handle_history))
        // Resume
        .route("/api/resume/upload", post(resume::handle_upload))
        .route("/api/resume/save-skills", post(resume::handle_save_skills))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
