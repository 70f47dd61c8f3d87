use clap::Args;
use serde::Serialize;
use std::path::Path;

use resym::batch::{self, ProcessedFile};
use resym::config::RenameConfig;
use resym::log_status;

use crate::commands::CmdResult;

#[derive(Args)]
pub struct RunArgs {
    /// JSON config file (flags override file values)
    #[arg(long, value_name = "PATH")]
    config: Option<String>,

    /// Root directory containing the source subdirectories
    #[arg(long, value_name = "DIR")]
    base_dir: Option<String>,

    /// Subdirectory to scan (repeatable; replaces the configured list)
    #[arg(long = "src-subdir", value_name = "DIR")]
    src_subdirs: Vec<String>,

    /// Output root (fully regenerated on every run)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<String>,

    /// rlparser JSON document (repeatable; replaces the configured list)
    #[arg(long = "api-doc", value_name = "PATH")]
    api_docs: Vec<String>,

    /// String prepended to every renamed symbol
    #[arg(long, value_name = "PREFIX")]
    prefix: Option<String>,

    /// Header basename pinned to src/<name> in the output tree (repeatable)
    #[arg(long = "canonical-header", value_name = "NAME")]
    canonical_headers: Vec<String>,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum RunOutput {
    #[serde(rename = "run")]
    #[serde(rename_all = "camelCase")]
    Run {
        symbol_count: usize,
        prefix: String,
        output_dir: String,
        processed_count: usize,
        processed: Vec<ProcessedFile>,
        skipped_subdirs: Vec<String>,
    },
}

pub(crate) fn resolve_config(
    config_path: Option<&str>,
    base_dir: Option<String>,
    src_subdirs: Vec<String>,
    output_dir: Option<String>,
    api_docs: Vec<String>,
    prefix: Option<String>,
    canonical_headers: Vec<String>,
) -> resym::Result<RenameConfig> {
    let mut config = match config_path {
        Some(path) => RenameConfig::load(Path::new(path))?,
        None => RenameConfig::default(),
    };

    if let Some(base_dir) = base_dir {
        config.base_dir = base_dir;
    }
    if !src_subdirs.is_empty() {
        config.src_subdirs = src_subdirs;
    }
    if let Some(output_dir) = output_dir {
        config.output_dir = output_dir;
    }
    if !api_docs.is_empty() {
        config.api_docs = api_docs;
    }
    if let Some(prefix) = prefix {
        config.prefix = prefix;
    }
    if !canonical_headers.is_empty() {
        config.canonical_headers = canonical_headers;
    }

    config.validate()?;
    Ok(config)
}

pub fn run(args: RunArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<RunOutput> {
    let config = resolve_config(
        args.config.as_deref(),
        args.base_dir,
        args.src_subdirs,
        args.output_dir,
        args.api_docs,
        args.prefix,
        args.canonical_headers,
    )?;

    let report = batch::run(&config)?;

    log_status!("rename", "Next steps:");
    log_status!(
        "rename",
        "  1. Compile the renamed library from '{}'",
        report.output_dir
    );
    log_status!("rename", "  2. Include the renamed headers instead of the originals");
    log_status!(
        "rename",
        "  3. Call the API with the '{}' prefix, e.g. {}InitWindow()",
        report.prefix,
        report.prefix
    );

    Ok((
        RunOutput::Run {
            symbol_count: report.symbol_count,
            prefix: report.prefix.clone(),
            output_dir: report.output_dir.clone(),
            processed_count: report.processed_count(),
            processed: report.processed,
            skipped_subdirs: report.skipped_subdirs,
        },
        0,
    ))
}
