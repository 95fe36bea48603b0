use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

/// Writes an uploaded file into `dir` as `<unix millis><.ext>` and returns
/// the stored file name. Only the original extension is kept, and only if
/// it is plain alphanumeric.
pub async fn store_upload(dir: &Path, original_name: Option<&str>, bytes: &[u8]) -> Result<String> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create upload directory {}", dir.display()))?;

    let file_name = format!(
        "{}{}",
        Utc::now().timestamp_millis(),
        safe_extension(original_name)
    );
    let path = dir.join(&file_name);

    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("Failed to write upload {}", path.display()))?;

    info!("Stored resume upload {} ({} bytes)", path.display(), bytes.len());
    Ok(file_name)
}

fn safe_extension(original_name: Option<&str>) -> String {
    original_name
        .and_then(|n| Path::new(n).extension())
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
        .unwrap_or_default()
}
