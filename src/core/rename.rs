//! Substitution engine — prefix whole-word symbol occurrences in text.
//!
//! Pure text-to-text transform, no file I/O. Each symbol becomes one
//! word-boundary-anchored replacement rule; rules are applied sequentially
//! over the evolving text, longest symbol first.

use crate::error::Error;
use crate::Result;
use regex::{NoExpand, Regex};
use std::collections::BTreeSet;

/// An ordered table of replacement rules built once per run and shared
/// read-only by every file transform.
#[derive(Debug)]
pub struct SymbolTable {
    prefix: String,
    rules: Vec<Rule>,
}

#[derive(Debug)]
struct Rule {
    symbol: String,
    pattern: Regex,
    replacement: String,
}

impl SymbolTable {
    /// Build the table from a symbol set.
    ///
    /// Symbols are ordered longest first so that a shorter symbol that is a
    /// substring of a longer one (`Window` inside `InitWindow`) can never
    /// corrupt the longer symbol's occurrences mid-pass. Length ties fall
    /// back to lexicographic order to keep runs reproducible.
    pub fn new(symbols: &BTreeSet<String>, prefix: &str) -> Result<Self> {
        let mut ordered: Vec<&String> = symbols.iter().collect();
        ordered.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let mut rules = Vec::with_capacity(ordered.len());
        for symbol in ordered {
            // \b matches exactly the C identifier boundary: the adjacent
            // character is not [A-Za-z0-9_].
            let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(symbol)))
                .map_err(|e| {
                    Error::validation_invalid_argument(
                        "symbol",
                        format!("Cannot build matcher for '{}': {}", symbol, e),
                    )
                })?;
            rules.push(Rule {
                symbol: symbol.clone(),
                pattern,
                replacement: format!("{}{}", prefix, symbol),
            });
        }

        Ok(Self {
            prefix: prefix.to_string(),
            rules,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Symbols in application order (longest first).
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.symbol.as_str())
    }

    /// Apply every rule to `text`, returning the transformed copy.
    pub fn apply(&self, text: &str) -> String {
        let mut content = text.to_string();
        for rule in &self.rules {
            content = rule
                .pattern
                .replace_all(&content, NoExpand(&rule.replacement))
                .into_owned();
        }
        content
    }
}
