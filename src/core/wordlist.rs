//! Wordlist pipeline
//!
//! Composes the variant generator with the dedup collector.

use crate::core::dedup::{Deduplicator, dedupe};
use crate::core::variants::generate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Expand each name into its variants, then deduplicate globally
    #[default]
    Generate,
    /// Deduplicate the input lines as-is
    DedupeOnly,
}

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    pub entries: Vec<String>,
    /// Entries before deduplication
    pub raw_count: usize,
}

impl Wordlist {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn duplicates_removed(&self) -> usize {
        self.raw_count - self.entries.len()
    }
}

/// Variants for every name in input order, deduplicated across all names.
pub fn build_wordlist(names: &[String]) -> Wordlist {
    let mut collector = Deduplicator::new();
    let mut raw_count = 0;

    for name in names {
        let variants = generate(name);
        raw_count += variants.len();
        collector.extend(variants);
    }

    log::debug!(
        "generated {} candidates from {} names, {} unique",
        raw_count,
        names.len(),
        collector.len()
    );

    Wordlist {
        entries: collector.into_vec(),
        raw_count,
    }
}

pub fn dedupe_only(lines: Vec<String>) -> Wordlist {
    let raw_count = lines.len();
    Wordlist {
        entries: dedupe(lines),
        raw_count,
    }
}

pub fn run(mode: Mode, lines: Vec<String>) -> Wordlist {
    match mode {
        Mode::Generate => build_wordlist(&lines),
        Mode::DedupeOnly => dedupe_only(lines),
    }
}
