use md5::Md5;
use sha1::{Digest, Sha1};
use std::fmt;
use std::str::FromStr;

use crate::core::error::WordlistError;

/// Optional one-way transform applied to every wordlist entry before output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashMode {
    #[default]
    None,
    Md5,
    Sha1,
}

impl HashMode {
    pub const NAMES: &'static [&'static str] = &["none", "md5", "sha1"];

    pub fn as_str(&self) -> &'static str {
        match self {
            HashMode::None => "none",
            HashMode::Md5 => "md5",
            HashMode::Sha1 => "sha1",
        }
    }

    /// Returns `value` unchanged, or its lowercase hex digest.
    pub fn apply(&self, value: &str) -> String {
        match self {
            HashMode::None => value.to_string(),
            HashMode::Md5 => hex::encode(Md5::digest(value.as_bytes())),
            HashMode::Sha1 => hex::encode(Sha1::digest(value.as_bytes())),
        }
    }
}

impl FromStr for HashMode {
    type Err = WordlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(HashMode::None),
            "md5" => Ok(HashMode::Md5),
            "sha1" => Ok(HashMode::Sha1),
            _ => Err(WordlistError::UnsupportedHash(s.to_string())),
        }
    }
}

impl fmt::Display for HashMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
