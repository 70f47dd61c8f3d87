//! Output path routing.
//!
//! By default a file keeps its relative path under the output root. The
//! primary headers are the exception: they move between subdirectories
//! across library versions, so they are pinned to one canonical include
//! path that downstream build scripts can rely on.

use std::path::{Path, PathBuf};

/// Subdirectory under the output root where canonical headers land.
const CANONICAL_DIR: &str = "src";

/// Maps input-relative paths to output-relative paths.
#[derive(Debug, Clone)]
pub struct PathRouter {
    canonical_headers: Vec<String>,
}

impl PathRouter {
    pub fn new(canonical_headers: &[String]) -> Self {
        Self {
            canonical_headers: canonical_headers.to_vec(),
        }
    }

    /// Resolve the output-relative path for an input-relative path.
    ///
    /// Every input path maps to exactly one output path: either the fixed
    /// canonical location (for a designated header basename, wherever it was
    /// found) or the identity mapping.
    pub fn route(&self, relative: &Path) -> PathBuf {
        if let Some(name) = relative.file_name().and_then(|n| n.to_str()) {
            if self.canonical_headers.iter().any(|h| h == name) {
                return Path::new(CANONICAL_DIR).join(name);
            }
        }
        relative.to_path_buf()
    }
}
