pub mod cli;
pub mod config;
pub mod dedup;
pub mod error;
pub mod hash;
pub mod input;
pub mod output;
pub mod variants;
pub mod wordlist;
