//! Skill records and target job management for the authenticated user.

pub mod handlers;
pub mod store;

use serde::Deserialize;

use crate::catalog::normalize;
use crate::errors::AppError;
use crate::models::skill::{SkillCategory, SkillRecord, MAX_SKILL_LEVEL, MIN_SKILL_LEVEL};

/// Add-or-update payload. Omitted fields keep the existing record's values,
/// or take defaults (level 1, technical) for a new skill.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub level: Option<u8>,
    #[serde(default)]
    pub category: Option<SkillCategory>,
}

/// Resolves `input` against the user's current skills by case-insensitive
/// name. The incoming spelling of the name always wins. Whether the write
/// adds or replaces is decided by the store, not here.
pub fn merge_skill(existing: &[SkillRecord], input: SkillInput) -> Result<SkillRecord, AppError> {
    let name = input
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::Validation("Skill name is required".to_string()))?;

    if let Some(level) = input.level {
        if !(MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(&level) {
            return Err(AppError::Validation(format!(
                "Skill level must be between {MIN_SKILL_LEVEL} and {MAX_SKILL_LEVEL}, got {level}"
            )));
        }
    }

    let key = normalize(name);
    let current = existing.iter().find(|s| normalize(&s.name) == key);

    Ok(SkillRecord {
        name: name.to_string(),
        level: input
            .level
            .or(current.map(|c| c.level))
            .unwrap_or(MIN_SKILL_LEVEL),
        category: input
            .category
            .or(current.map(|c| c.category))
            .unwrap_or_default(),
    })
}
