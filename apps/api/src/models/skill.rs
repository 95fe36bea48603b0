use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::AppError;

pub const MIN_SKILL_LEVEL: u8 = 1;
pub const MAX_SKILL_LEVEL: u8 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    #[default]
    Technical,
    Soft,
    Tool,
    Domain,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "technical",
            SkillCategory::Soft => "soft",
            SkillCategory::Tool => "tool",
            SkillCategory::Domain => "domain",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "technical" => Some(SkillCategory::Technical),
            "soft" => Some(SkillCategory::Soft),
            "tool" => Some(SkillCategory::Tool),
            "domain" => Some(SkillCategory::Domain),
            _ => None,
        }
    }
}

/// A self-assessed skill on a user's profile. Identity is the
/// case-insensitive name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, FromRow)]
pub struct SkillRow {
    pub name: String,
    pub level: i16,
    pub category: String,
}

impl TryFrom<SkillRow> for SkillRecord {
    type Error = AppError;

    fn try_from(row: SkillRow) -> Result<Self, Self::Error> {
        let level = u8::try_from(row.level)
            .ok()
            .filter(|l| (MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(l))
            .ok_or_else(|| {
                AppError::Internal(anyhow::anyhow!(
                    "skill '{}' has out-of-range level {}",
                    row.name,
                    row.level
                ))
            })?;
        let category = SkillCategory::parse(&row.category).ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!(
                "skill '{}' has unknown category '{}'",
                row.name,
                row.category
            ))
        })?;
        Ok(SkillRecord {
            name: row.name,
            level,
            category,
        })
    }
}
