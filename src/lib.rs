//! namegrind - Name-based password wordlist generator
//!
//! This crate provides both a CLI and a library for expanding a list of
//! names into password candidates (case variants, reversals, common
//! suffixes), deduplicating them and optionally hashing the output.

pub mod core;

pub use crate::core::dedup::{Deduplicator, dedupe};
pub use crate::core::hash::HashMode;
pub use crate::core::variants::generate;
pub use crate::core::wordlist::{Mode, Wordlist, build_wordlist};
