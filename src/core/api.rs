//! rlparser API document schema and symbol collection.
//!
//! An API doc is the JSON emitted by rlparser for one header: flat lists of
//! defines, structs, aliases, enums and functions. Only the names survive
//! into the symbol set; the define `type` field is consulted once, to drop
//! header guards.

use crate::error::Error;
use crate::io;
use crate::{log_status, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;

/// Define `type` marking a header-guard macro. Guards are not part of the
/// callable API surface; renaming them would break conditional compilation.
const GUARD_TYPE: &str = "GUARD";

/// A `defines` entry. Carries a `type` so guards can be filtered out.
#[derive(Debug, Clone, Deserialize)]
pub struct DefineEntry {
    pub name: String,
    #[serde(default)]
    pub r#type: String,
}

/// An entry from any of the name-only categories (structs, aliases, enums,
/// functions).
#[derive(Debug, Clone, Deserialize)]
pub struct NamedEntry {
    pub name: String,
}

/// One parsed API description document. Every category is optional; a doc
/// covering only functions is valid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiDoc {
    #[serde(default)]
    pub defines: Vec<DefineEntry>,
    #[serde(default)]
    pub structs: Vec<NamedEntry>,
    #[serde(default)]
    pub aliases: Vec<NamedEntry>,
    #[serde(default)]
    pub enums: Vec<NamedEntry>,
    #[serde(default)]
    pub functions: Vec<NamedEntry>,
}

impl ApiDoc {
    /// Parse a document from JSON text.
    pub fn parse(raw: &str, source: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| Error::api_doc_invalid(source, e))
    }

    /// Extract every renameable symbol: all struct, alias, enum and function
    /// names, plus non-guard defines.
    pub fn symbols(&self) -> BTreeSet<String> {
        let mut symbols = BTreeSet::new();

        for define in &self.defines {
            if define.r#type != GUARD_TYPE {
                symbols.insert(define.name.clone());
            }
        }
        for entry in self
            .structs
            .iter()
            .chain(&self.aliases)
            .chain(&self.enums)
            .chain(&self.functions)
        {
            symbols.insert(entry.name.clone());
        }

        symbols
    }
}

/// Collect the union of symbols from every document.
///
/// A missing document warns and contributes nothing; a document that exists
/// but fails to parse is fatal. Duplicate names across documents collapse to
/// one entry.
pub fn collect_symbols(doc_paths: &[impl AsRef<Path>]) -> Result<BTreeSet<String>> {
    let mut symbols = BTreeSet::new();

    for doc_path in doc_paths {
        let doc_path = doc_path.as_ref();
        if !doc_path.exists() {
            log_status!("collect", "Warning: {} not found, skipping", doc_path.display());
            continue;
        }

        let raw = io::read_file(doc_path, &format!("read API doc {}", doc_path.display()))?;
        let doc = ApiDoc::parse(&raw, &doc_path.display().to_string())?;
        symbols.extend(doc.symbols());
    }

    Ok(symbols)
}
