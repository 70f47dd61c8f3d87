use clap::Args;
use serde::Serialize;
use std::path::Path;

use resym::api;
use resym::config::RenameConfig;

use crate::commands::CmdResult;

#[derive(Args)]
pub struct SymbolsArgs {
    /// JSON config file (flags override file values)
    #[arg(long, value_name = "PATH")]
    config: Option<String>,

    /// rlparser JSON document (repeatable; replaces the configured list)
    #[arg(long = "api-doc", value_name = "PATH")]
    api_docs: Vec<String>,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum SymbolsOutput {
    #[serde(rename = "symbols")]
    #[serde(rename_all = "camelCase")]
    Symbols {
        symbol_count: usize,
        symbols: Vec<String>,
    },
}

/// Run the collector alone and list what a run would rename.
pub fn run(args: SymbolsArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<SymbolsOutput> {
    let mut config = match args.config.as_deref() {
        Some(path) => RenameConfig::load(Path::new(path))?,
        None => RenameConfig::default(),
    };
    if !args.api_docs.is_empty() {
        config.api_docs = args.api_docs;
    }

    let symbols = api::collect_symbols(&config.api_doc_paths())?;
    if symbols.is_empty() {
        return Err(resym::Error::symbols_empty(config.api_docs.clone()));
    }

    Ok((
        SymbolsOutput::Symbols {
            symbol_count: symbols.len(),
            symbols: symbols.into_iter().collect(),
        },
        0,
    ))
}
