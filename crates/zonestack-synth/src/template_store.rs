//! Template file access.

use std::path::PathBuf;

use tracing::debug;

use crate::error::{SynthError, SynthResult};

/// Reads template bodies referenced by configuration.
pub trait TemplateStore {
    /// Read a template body by its configuration-relative path.
    ///
    /// A missing or unreadable template is fatal for the definition that
    /// references it.
    fn read_template(&self, path: &str) -> SynthResult<String>;
}

/// Filesystem-backed template store rooted at the configured base directory.
#[derive(Debug, Clone)]
pub struct FsTemplateStore {
    base_dir: PathBuf,
}

impl FsTemplateStore {
    /// Create a store rooted at `base_dir`.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl TemplateStore for FsTemplateStore {
    fn read_template(&self, path: &str) -> SynthResult<String> {
        let full = self.base_dir.join(path);
        debug!(path = %full.display(), "reading template");
        std::fs::read_to_string(&full).map_err(|source| SynthError::TemplateRead {
            path: full.display().to_string(),
            source,
        })
    }
}
