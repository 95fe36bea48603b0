use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "skillgap-api",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

/// GET /
/// Service banner listing the public endpoints.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": "Skill Gap API is running",
        "status": "OK",
        "endpoints": {
            "skills": {
                "list": "GET /api/skills",
                "add": "POST /api/skills",
                "remove": "DELETE /api/skills/:skill_name",
                "targetJob": {
                    "get": "GET /api/skills/target-job",
                    "set": "POST /api/skills/target-job"
                }
            },
            "gaps": {
                "analyze": "GET /api/gaps/analyze",
                "history": "GET /api/gaps/history"
            },
            "resume": {
                "upload": "POST /api/resume/upload",
                "saveSkills": "POST /api/resume/save-skills"
            },
            "jobs": "GET /api/jobs",
            "health": "GET /health"
        }
    }))
}
