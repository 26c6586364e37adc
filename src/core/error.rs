//! Failures that map to a dedicated process exit status.

use std::path::PathBuf;
use thiserror::Error;

pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_INPUT_NOT_FOUND: i32 = 2;
pub const EXIT_UNSUPPORTED_HASH: i32 = 3;

#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("unsupported hash mode '{0}' (supported: none, md5, sha1)")]
    UnsupportedHash(String),
}

impl WordlistError {
    pub fn exit_code(&self) -> i32 {
        match self {
            WordlistError::InputNotFound(_) => EXIT_INPUT_NOT_FOUND,
            WordlistError::UnsupportedHash(_) => EXIT_UNSUPPORTED_HASH,
        }
    }
}

/// Exit status for an error chain: the first `WordlistError` found wins.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<WordlistError>())
        .map(WordlistError::exit_code)
        .unwrap_or(EXIT_FAILURE)
}
