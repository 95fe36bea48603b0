//! Axum route handlers for resume upload and saving extracted skills.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::AuthUser;
use crate::catalog::normalize;
use crate::errors::{AppError, AppJson};
use crate::models::skill::SkillRecord;
use crate::resume::storage::store_upload;
use crate::resume::{ExtractedSkill, ResumeDocument};
use crate::skills::{merge_skill, SkillInput};
use crate::state::AppState;

/// Multipart field carrying the document.
const RESUME_FIELD: &str = "resume";
/// Reported when the request carried no file.
const PLACEHOLDER_FILENAME: &str = "demo.pdf";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub filename: String,
    pub extracted_skills: Vec<ExtractedSkill>,
    pub total_skills: usize,
    pub extraction_method: String,
    pub confidence: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveSkillsRequest {
    #[serde(default)]
    pub skills: Vec<SkillInput>,
}

#[derive(Debug, Serialize)]
pub struct SaveSkillsResponse {
    pub success: bool,
    pub saved: usize,
    pub skills: Vec<SkillRecord>,
}

/// POST /api/resume/upload
///
/// Stores the `resume` file if one was sent, then returns whatever the
/// configured scanner reports. The upload is optional.
pub async fn handle_upload(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut upload: Option<(Option<String>, bytes::Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let original_name = field.file_name().map(str::to_string);
        let data = field.bytes().await?;
        upload = Some((original_name, data));
        break;
    }

    let filename = match &upload {
        Some((original_name, data)) => {
            store_upload(&state.config.upload_dir, original_name.as_deref(), data).await?
        }
        None => PLACEHOLDER_FILENAME.to_string(),
    };

    let document = upload.as_ref().map(|(original_name, data)| ResumeDocument {
        original_name: original_name.as_deref(),
        bytes: data,
    });
    let extracted_skills = state.scanner.scan(document).await?;

    info!(
        "Resume upload from {}: {} -> {} skills",
        user.email,
        filename,
        extracted_skills.len()
    );

    Ok(Json(UploadResponse {
        success: true,
        message: "Resume uploaded successfully! Skills extracted automatically.".to_string(),
        filename,
        total_skills: extracted_skills.len(),
        extracted_skills,
        extraction_method: state.scanner.method().to_string(),
        confidence: "High".to_string(),
    }))
}

/// POST /api/resume/save-skills
///
/// Applies each skill with the same add-or-update rule as `POST /api/skills`.
/// Validation happens up front and the batch is written atomically, so an
/// invalid entry or a failed write saves nothing.
pub async fn handle_save_skills(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(request): AppJson<SaveSkillsRequest>,
) -> Result<Json<SaveSkillsResponse>, AppError> {
    if request.skills.is_empty() {
        return Err(AppError::Validation("No skills provided".to_string()));
    }

    let mut current = state.store.load_profile(user.user_id).await?.skills;
    let mut records = Vec::with_capacity(request.skills.len());
    for input in request.skills {
        let record = merge_skill(&current, input)?;
        // later entries merge against earlier ones in the same batch
        let key = normalize(&record.name);
        match current.iter_mut().find(|s| normalize(&s.name) == key) {
            Some(slot) => *slot = record.clone(),
            None => current.push(record.clone()),
        }
        records.push(record);
    }

    let skills = state.store.save_skills(user.user_id, &records).await?;

    info!("Saved {} extracted skills for user {}", records.len(), user.user_id);
    Ok(Json(SaveSkillsResponse {
        success: true,
        saved: records.len(),
        skills,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use uuid::Uuid;

    use crate::errors::AppError;
    use crate::models::skill::SkillRecord;
    use crate::models::target_job::TargetJob;
    use crate::skills::store::{ProfileStore, SavedSkill, UserProfile};
    use crate::test_support::{MemoryProfileStore, TestApp};

    /// Only accepts whole batches; single-record writes fail.
    struct BatchOnlyStore(MemoryProfileStore);

    #[async_trait]
    impl ProfileStore for BatchOnlyStore {
        async fn load_profile(&self, user_id: Uuid) -> Result<UserProfile, AppError> {
            self.0.load_profile(user_id).await
        }

        async fn save_skill(&self, _: Uuid, _: &SkillRecord) -> Result<SavedSkill, AppError> {
            Err(AppError::Internal(anyhow::anyhow!("unexpected single-record write")))
        }

        async fn save_skills(
            &self,
            user_id: Uuid,
            skills: &[SkillRecord],
        ) -> Result<Vec<SkillRecord>, AppError> {
            self.0.save_skills(user_id, skills).await
        }

        async fn remove_skill(
            &self,
            user_id: Uuid,
            name: &str,
        ) -> Result<Option<Vec<SkillRecord>>, AppError> {
            self.0.remove_skill(user_id, name).await
        }

        async fn set_target_job(&self, user_id: Uuid, job: &TargetJob) -> Result<(), AppError> {
            self.0.set_target_job(user_id, job).await
        }
    }

    const BOUNDARY: &str = "skillgap-test-boundary";

    fn multipart_request(app: &TestApp, parts: &[(&str, Option<&str>, &str)]) -> Request<Body> {
        let mut body = String::new();
        for (name, filename, content) in parts {
            body.push_str(&format!("--{BOUNDARY}\r\n"));
            match filename {
                Some(f) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{f}\"\r\nContent-Type: application/pdf\r\n\r\n"
                )),
                None => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
                )),
            }
            body.push_str(content);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        Request::builder()
            .method("POST")
            .uri("/api/resume/upload")
            .header("Authorization", app.bearer())
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_upload_stores_file_and_returns_demo_skills() {
        let app = TestApp::new().await;
        let request = multipart_request(&app, &[("resume", Some("cv.pdf"), "%PDF-1.4 Rust")]);

        let (status, body) = app.call(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["totalSkills"], 7);
        assert_eq!(body["extractedSkills"][0]["name"], "JavaScript");
        assert_eq!(body["extractedSkills"][0]["confidence"], 85);
        assert_eq!(body["extractionMethod"], "demo");

        let filename = body["filename"].as_str().unwrap();
        assert!(filename.ends_with(".pdf"), "{filename}");
        let stored = std::fs::read(app.upload_dir.path().join(filename)).unwrap();
        assert_eq!(stored, b"%PDF-1.4 Rust");
    }

    #[tokio::test]
    async fn test_upload_without_file_still_succeeds() {
        let app = TestApp::new().await;
        let request = multipart_request(&app, &[("note", None, "no file attached")]);

        let (status, body) = app.call(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["filename"], "demo.pdf");
        assert_eq!(body["totalSkills"], 7);
    }

    #[tokio::test]
    async fn test_save_skills_merges_into_profile() {
        let app = TestApp::new().await;
        app.send("POST", "/api/skills", Some(json!({"name": "git", "level": 2})))
            .await;

        let (status, body) = app
            .send(
                "POST",
                "/api/resume/save-skills",
                Some(json!({"skills": [
                    {"name": "Git", "category": "tool"},
                    {"name": "React", "level": 3}
                ]})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["saved"], 2);
        assert_eq!(
            body["skills"],
            json!([
                {"name": "Git", "level": 2, "category": "tool"},
                {"name": "React", "level": 3, "category": "technical"}
            ])
        );
    }

    #[tokio::test]
    async fn test_save_skills_rejects_empty_batch() {
        let app = TestApp::new().await;
        let (status, _) = app
            .send("POST", "/api/resume/save-skills", Some(json!({"skills": []})))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_save_skills_invalid_entry_saves_nothing() {
        let app = TestApp::new().await;
        let (status, _) = app
            .send(
                "POST",
                "/api/resume/save-skills",
                Some(json!({"skills": [{"name": "Go", "level": 2}, {"level": 3}]})),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = app.send("GET", "/api/skills", None).await;
        assert_eq!(body["skills"], json!([]));
    }

    #[tokio::test]
    async fn test_save_skills_writes_one_batch() {
        let inner = MemoryProfileStore::default();
        let user_id = Uuid::new_v4();
        inner.add_user(user_id).await;
        let app = TestApp::with_store(Arc::new(BatchOnlyStore(inner)), user_id);

        let (status, body) = app
            .send(
                "POST",
                "/api/resume/save-skills",
                Some(json!({"skills": [
                    {"name": "SQL", "level": 3},
                    {"name": "sql", "level": 4},
                    {"name": "Figma", "category": "tool"}
                ]})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["saved"], 3);
        assert_eq!(
            body["skills"],
            json!([
                {"name": "sql", "level": 4, "category": "technical"},
                {"name": "Figma", "level": 1, "category": "tool"}
            ])
        );
    }

    #[tokio::test]
    async fn test_save_skills_malformed_level_uses_error_body() {
        let app = TestApp::new().await;
        let (status, body) = app
            .send(
                "POST",
                "/api/resume/save-skills",
                Some(json!({"skills": [{"name": "Go", "level": 700}]})),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (_, body) = app.send("GET", "/api/skills", None).await;
        assert_eq!(body["skills"], json!([]));
    }
}
