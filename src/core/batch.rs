//! Batch orchestrator — collect symbols once, then transform every source
//! file under the configured subdirectories into a mirrored output tree.
//!
//! The output root is fully regenerated on every run so stale files from a
//! previous symbol set never linger. A read or write failure mid-batch
//! aborts the run and may leave a partial output tree behind; the next
//! successful run replaces it wholesale.

use crate::api;
use crate::config::RenameConfig;
use crate::error::Error;
use crate::io;
use crate::rename::SymbolTable;
use crate::router::PathRouter;
use crate::{log_status, Result};
use serde::Serialize;
use std::path::Path;

/// One file processed by a run, both paths relative to their roots.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedFile {
    pub input: String,
    pub output: String,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    /// Unique symbols in the substitution table.
    pub symbol_count: usize,
    pub prefix: String,
    pub output_dir: String,
    pub processed: Vec<ProcessedFile>,
    /// Configured subdirectories that did not exist and were skipped.
    pub skipped_subdirs: Vec<String>,
}

impl BatchReport {
    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }
}

/// Execute one full rename run.
pub fn run(config: &RenameConfig) -> Result<BatchReport> {
    config.validate()?;

    let symbols = api::collect_symbols(&config.api_doc_paths())?;
    if symbols.is_empty() {
        return Err(Error::symbols_empty(config.api_docs.clone()));
    }

    let table = SymbolTable::new(&symbols, &config.prefix)?;
    log_status!(
        "collect",
        "Collected {} unique symbols to rename with '{}' prefix",
        table.len(),
        table.prefix()
    );

    let base = config.base_path();
    let output_base = config.output_path();
    let router = PathRouter::new(&config.canonical_headers);

    // Discard any previous run's output before writing anything.
    if output_base.exists() {
        std::fs::remove_dir_all(&output_base).map_err(|e| {
            Error::internal_io(
                e.to_string(),
                Some(format!("remove {}", output_base.display())),
            )
        })?;
    }

    let mut processed = Vec::new();
    let mut skipped_subdirs = Vec::new();

    for subdir in &config.src_subdirs {
        let input_dir = base.join(subdir);
        if !input_dir.is_dir() {
            log_status!("rename", "Warning: directory not found: {}, skipping", input_dir.display());
            skipped_subdirs.push(subdir.clone());
            continue;
        }

        for file_path in source_files(&input_dir)? {
            let relative = file_path.strip_prefix(&base).unwrap_or(&file_path);
            let out_relative = router.route(relative);
            let out_path = output_base.join(&out_relative);

            if let Some(parent) = out_path.parent() {
                io::create_dir_all(parent, &format!("create {}", parent.display()))?;
            }

            let content =
                io::read_file(&file_path, &format!("read {}", file_path.display()))?;
            let renamed = table.apply(&content);
            io::write_file(&out_path, &renamed, &format!("write {}", out_path.display()))?;

            log_status!(
                "rename",
                "Processed: {} -> {}",
                relative.display(),
                out_relative.display()
            );
            processed.push(ProcessedFile {
                input: relative.display().to_string(),
                output: out_relative.display().to_string(),
            });
        }
    }

    log_status!("rename", "Done. Processed {} files into {}", processed.len(), output_base.display());

    Ok(BatchReport {
        symbol_count: table.len(),
        prefix: table.prefix().to_string(),
        output_dir: config.output_dir.clone(),
        processed,
        skipped_subdirs,
    })
}

/// Enumerate .c and .h files directly inside `dir`, in sorted order.
fn source_files(dir: &Path) -> Result<Vec<std::path::PathBuf>> {
    let pattern = format!("{}/*.[ch]", dir.display());
    let entries = glob::glob(&pattern).map_err(|e| {
        Error::validation_invalid_argument("srcSubdirs", format!("Bad glob pattern '{}': {}", pattern, e))
    })?;

    let mut files: Vec<_> = entries.flatten().filter(|p| p.is_file()).collect();
    files.sort();
    Ok(files)
}
