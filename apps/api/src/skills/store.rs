//! Profile persistence behind a pluggable trait.
//!
//! `AppState` holds an `Arc<dyn ProfileStore>`; production uses
//! [`PgProfileStore`]. Skills are keyed by normalized name, so the
//! case-insensitive identity rule is enforced by the unique key.

use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool};
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::normalize;
use crate::errors::AppError;
use crate::models::skill::{SkillRecord, SkillRow};
use crate::models::target_job::{TargetJob, TargetJobRow};
use crate::models::user::User;

/// Everything the analysis needs about one user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub skills: Vec<SkillRecord>,
    pub target_job: Option<TargetJob>,
}

/// Outcome of a single upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedSkill {
    /// True when a record with the same normalized name already existed.
    pub updated: bool,
    pub skills: Vec<SkillRecord>,
}

/// All methods fail with `AppError::NotFound` when the user does not exist.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn load_profile(&self, user_id: Uuid) -> Result<UserProfile, AppError>;

    /// Inserts or replaces the skill with the same normalized name.
    async fn save_skill(&self, user_id: Uuid, skill: &SkillRecord) -> Result<SavedSkill, AppError>;

    /// Upserts every record, or none of them if any write fails.
    /// Returns the user's skills afterwards.
    async fn save_skills(
        &self,
        user_id: Uuid,
        skills: &[SkillRecord],
    ) -> Result<Vec<SkillRecord>, AppError>;

    /// Returns `None` when no skill matched `name`.
    async fn remove_skill(
        &self,
        user_id: Uuid,
        name: &str,
    ) -> Result<Option<Vec<SkillRecord>>, AppError>;

    async fn set_target_job(&self, user_id: Uuid, job: &TargetJob) -> Result<(), AppError>;
}

pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn ensure_user(&self, user_id: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    async fn fetch_skills(&self, user_id: Uuid) -> Result<Vec<SkillRecord>, AppError> {
        sqlx::query_as::<_, SkillRow>(
            r#"
            SELECT name, level, category
            FROM user_skills
            WHERE user_id = $1
            ORDER BY position
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(SkillRecord::try_from)
        .collect()
    }
}

/// Upserts one skill by normalized name. Returns true if a row was replaced.
async fn upsert_skill<'e, E: PgExecutor<'e>>(
    executor: E,
    user_id: Uuid,
    skill: &SkillRecord,
) -> Result<bool, sqlx::Error> {
    let inserted: bool = sqlx::query_scalar(
        r#"
        INSERT INTO user_skills (user_id, name, name_key, level, category)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (user_id, name_key)
        DO UPDATE SET name = EXCLUDED.name,
                      level = EXCLUDED.level,
                      category = EXCLUDED.category
        RETURNING (xmax = 0) AS inserted
        "#,
    )
    .bind(user_id)
    .bind(&skill.name)
    .bind(normalize(&skill.name))
    .bind(i16::from(skill.level))
    .bind(skill.category.as_str())
    .fetch_one(executor)
    .await?;

    Ok(!inserted)
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn load_profile(&self, user_id: Uuid) -> Result<UserProfile, AppError> {
        let user = self.ensure_user(user_id).await?;
        let skills = self.fetch_skills(user_id).await?;

        let target_job = sqlx::query_as::<_, TargetJobRow>(
            "SELECT title, industry, required_skills FROM target_jobs WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .map(TargetJob::from);

        debug!(
            "Loaded profile for {} ({} skills, target job: {})",
            user.email,
            skills.len(),
            target_job.is_some()
        );
        Ok(UserProfile { skills, target_job })
    }

    async fn save_skill(&self, user_id: Uuid, skill: &SkillRecord) -> Result<SavedSkill, AppError> {
        self.ensure_user(user_id).await?;

        let updated = upsert_skill(&self.pool, user_id, skill).await?;

        info!(
            "{} skill '{}' (level {}) for user {user_id}",
            if updated { "Updated" } else { "Added" },
            skill.name,
            skill.level
        );
        Ok(SavedSkill {
            updated,
            skills: self.fetch_skills(user_id).await?,
        })
    }

    async fn save_skills(
        &self,
        user_id: Uuid,
        skills: &[SkillRecord],
    ) -> Result<Vec<SkillRecord>, AppError> {
        self.ensure_user(user_id).await?;

        let mut tx = self.pool.begin().await?;
        for skill in skills {
            upsert_skill(&mut *tx, user_id, skill).await?;
        }
        tx.commit().await?;

        info!("Saved {} skills for user {user_id}", skills.len());
        self.fetch_skills(user_id).await
    }

    async fn remove_skill(
        &self,
        user_id: Uuid,
        name: &str,
    ) -> Result<Option<Vec<SkillRecord>>, AppError> {
        self.ensure_user(user_id).await?;

        let removed = sqlx::query("DELETE FROM user_skills WHERE user_id = $1 AND name_key = $2")
            .bind(user_id)
            .bind(normalize(name))
            .execute(&self.pool)
            .await?
            .rows_affected();

        if removed == 0 {
            return Ok(None);
        }
        info!("Removed skill '{name}' for user {user_id}");
        Ok(Some(self.fetch_skills(user_id).await?))
    }

    async fn set_target_job(&self, user_id: Uuid, job: &TargetJob) -> Result<(), AppError> {
        self.ensure_user(user_id).await?;

        sqlx::query(
            r#"
            INSERT INTO target_jobs (user_id, title, industry, required_skills)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id)
            DO UPDATE SET title = EXCLUDED.title,
                          industry = EXCLUDED.industry,
                          required_skills = EXCLUDED.required_skills,
                          updated_at = now()
            "#,
        )
        .bind(user_id)
        .bind(&job.title)
        .bind(&job.industry)
        .bind(&job.required_skills)
        .execute(&self.pool)
        .await?;

        info!("Set target job '{}' for user {user_id}", job.title);
        Ok(())
    }
}
