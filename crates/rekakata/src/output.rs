//! Writing exported prompts to disk.

use chrono::Local;
use rekakata_error::{ExportError, ExportErrorKind};
use rekakata_response::ExportFormat;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write `content` to `dir/prompt_<YYYYmmdd_HHMMSS>.<ext>`.
///
/// The directory is created when missing.
///
/// # Errors
///
/// Returns an export error if the directory or file cannot be written.
pub fn write_export(
    content: &str,
    format: ExportFormat,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|e| {
        ExportError::new(ExportErrorKind::Write(format!("{}: {}", dir.display(), e)))
    })?;

    let name = format!(
        "prompt_{}.{}",
        Local::now().format("%Y%m%d_%H%M%S"),
        format.extension()
    );
    let path = dir.join(name);

    std::fs::write(&path, content).map_err(|e| {
        ExportError::new(ExportErrorKind::Write(format!("{}: {}", path.display(), e)))
    })?;

    info!(path = %path.display(), format = %format, "Exported prompt");
    Ok(path)
}
