//! Output writing and run summaries

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{PubsError, PubsResult};

/// Overwrite `path` with `contents` in one write.
///
/// Missing parent directories are created.
pub fn write_output(path: impl AsRef<Path>, contents: &str) -> PubsResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PubsError::io(parent, e))?;
    }
    std::fs::write(path, contents).map_err(|e| PubsError::io(path, e))?;
    tracing::info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// What one artifact write produced, printed as the run's summary line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub count: usize,
    pub path: PathBuf,
    /// What was counted, e.g. "entries"
    pub noun: &'static str,
}

impl WriteSummary {
    pub fn new(count: usize, path: impl Into<PathBuf>, noun: &'static str) -> Self {
        Self {
            count,
            path: path.into(),
            noun,
        }
    }
}

impl fmt::Display for WriteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} {} to {}",
            self.count,
            self.noun,
            self.path.display()
        )
    }
}
