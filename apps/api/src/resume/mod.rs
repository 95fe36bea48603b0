//! Resume scanning behind a pluggable trait. Currently a fixed demo stub.
//!
//! `DemoResumeScanner` ignores the document and always reports the same
//! skills. `AppState` holds an `Arc<dyn ResumeScanner>` so a real
//! extractor can replace it without touching the handlers.

pub mod handlers;
pub mod storage;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::models::skill::SkillCategory;

/// A skill reported by a scanner, with the scanner's confidence (0-100).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSkill {
    pub name: String,
    pub confidence: u8,
    pub category: SkillCategory,
    pub action: String, // suggested client action; always "add" for now
}

/// An uploaded document as received from the client.
pub struct ResumeDocument<'a> {
    pub original_name: Option<&'a str>,
    pub bytes: &'a [u8],
}

#[async_trait]
pub trait ResumeScanner: Send + Sync {
    /// Label reported to clients as `extractionMethod`.
    fn method(&self) -> &'static str;

    async fn scan(&self, document: Option<ResumeDocument<'_>>)
        -> Result<Vec<ExtractedSkill>, AppError>;
}

const DEMO_SKILLS: &[(&str, u8, SkillCategory)] = &[
    ("JavaScript", 85, SkillCategory::Technical),
    ("React", 78, SkillCategory::Technical),
    ("Node.js", 65, SkillCategory::Technical),
    ("HTML/CSS", 90, SkillCategory::Technical),
    ("Git", 70, SkillCategory::Tool),
    ("Communication", 72, SkillCategory::Soft),
    ("Problem Solving", 75, SkillCategory::Soft),
];

/// Returns the fixed demo list whatever the upload contains, or with no
/// upload at all. No parsing takes place.
pub struct DemoResumeScanner;

#[async_trait]
impl ResumeScanner for DemoResumeScanner {
    fn method(&self) -> &'static str {
        "demo"
    }

    async fn scan(
        &self,
        document: Option<ResumeDocument<'_>>,
    ) -> Result<Vec<ExtractedSkill>, AppError> {
        if let Some(doc) = document {
            debug!(
                "Demo scanner ignoring {} bytes from {}",
                doc.bytes.len(),
                doc.original_name.unwrap_or("<unnamed>")
            );
        }
        Ok(DEMO_SKILLS
            .iter()
            .map(|(name, confidence, category)| ExtractedSkill {
                name: name.to_string(),
                confidence: *confidence,
                category: *category,
                action: "add".to_string(),
            })
            .collect())
    }
}
