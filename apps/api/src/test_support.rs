//! Shared fixtures for router tests: an in-memory profile store and
//! request helpers. No database is contacted.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tokio::sync::Mutex;
use tower::ServiceExt;
use uuid::Uuid;

use crate::auth::{sign_test_token, TokenVerifier};
use crate::catalog::normalize;
use crate::config::Config;
use crate::errors::AppError;
use crate::models::skill::SkillRecord;
use crate::models::target_job::TargetJob;
use crate::resume::DemoResumeScanner;
use crate::routes::build_router;
use crate::skills::store::{ProfileStore, SavedSkill, UserProfile};
use crate::state::AppState;

const FAR_FUTURE: usize = 4_102_444_800;

#[derive(Default)]
pub struct MemoryProfileStore {
    profiles: Mutex<HashMap<Uuid, UserProfile>>,
}

impl MemoryProfileStore {
    pub async fn add_user(&self, user_id: Uuid) {
        self.profiles
            .lock()
            .await
            .insert(user_id, UserProfile::default());
    }
}

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

fn upsert(skills: &mut Vec<SkillRecord>, skill: &SkillRecord) -> bool {
    let key = normalize(&skill.name);
    match skills.iter_mut().find(|s| normalize(&s.name) == key) {
        Some(slot) => {
            *slot = skill.clone();
            true
        }
        None => {
            skills.push(skill.clone());
            false
        }
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn load_profile(&self, user_id: Uuid) -> Result<UserProfile, AppError> {
        self.profiles
            .lock()
            .await
            .get(&user_id)
            .cloned()
            .ok_or_else(user_not_found)
    }

    async fn save_skill(&self, user_id: Uuid, skill: &SkillRecord) -> Result<SavedSkill, AppError> {
        let mut profiles = self.profiles.lock().await;
        let profile = profiles.get_mut(&user_id).ok_or_else(user_not_found)?;
        let updated = upsert(&mut profile.skills, skill);
        Ok(SavedSkill {
            updated,
            skills: profile.skills.clone(),
        })
    }

    async fn save_skills(
        &self,
        user_id: Uuid,
        skills: &[SkillRecord],
    ) -> Result<Vec<SkillRecord>, AppError> {
        let mut profiles = self.profiles.lock().await;
        let profile = profiles.get_mut(&user_id).ok_or_else(user_not_found)?;
        for skill in skills {
            upsert(&mut profile.skills, skill);
        }
        Ok(profile.skills.clone())
    }

    async fn remove_skill(
        &self,
        user_id: Uuid,
        name: &str,
    ) -> Result<Option<Vec<SkillRecord>>, AppError> {
        let mut profiles = self.profiles.lock().await;
        let profile = profiles.get_mut(&user_id).ok_or_else(user_not_found)?;
        let key = normalize(name);
        let before = profile.skills.len();
        profile.skills.retain(|s| normalize(&s.name) != key);
        if profile.skills.len() == before {
            return Ok(None);
        }
        Ok(Some(profile.skills.clone()))
    }

    async fn set_target_job(&self, user_id: Uuid, job: &TargetJob) -> Result<(), AppError> {
        let mut profiles = self.profiles.lock().await;
        let profile = profiles.get_mut(&user_id).ok_or_else(user_not_found)?;
        profile.target_job = Some(job.clone());
        Ok(())
    }
}

/// A router backed by a fresh in-memory store with one registered user.
pub struct TestApp {
    pub router: Router,
    pub user_id: Uuid,
    pub upload_dir: tempfile::TempDir,
    secret: String,
}

impl TestApp {
    pub async fn new() -> Self {
        let store = Arc::new(MemoryProfileStore::default());
        let user_id = Uuid::new_v4();
        store.add_user(user_id).await;
        Self::with_store(store, user_id)
    }

    /// Builds the router around a caller-supplied store.
    pub fn with_store(store: Arc<dyn ProfileStore>, user_id: Uuid) -> Self {
        let upload_dir = tempfile::tempdir().unwrap();
        let config = Config::for_tests(PathBuf::from(upload_dir.path()));
        let secret = config.jwt_secret.clone();

        let state = AppState {
            store,
            scanner: Arc::new(DemoResumeScanner),
            tokens: Arc::new(TokenVerifier::new(&secret)),
            config,
        };

        TestApp {
            router: build_router(state),
            user_id,
            upload_dir,
            secret,
        }
    }

    pub fn bearer(&self) -> String {
        self.bearer_for(self.user_id)
    }

    pub fn bearer_for(&self, user_id: Uuid) -> String {
        format!("Bearer {}", sign_test_token(&self.secret, user_id, FAR_FUTURE))
    }

    /// Sends an authenticated request with an optional JSON body.
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("Authorization", self.bearer());
        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.call(request).await
    }

    pub async fn call(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }
}
