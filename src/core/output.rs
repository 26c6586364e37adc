use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::core::hash::HashMode;
use crate::core::input::STDIO_MARKER;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
}

impl Sink {
    pub fn parse(arg: &str) -> Self {
        if arg == STDIO_MARKER {
            Sink::Stdout
        } else {
            Sink::File(PathBuf::from(arg))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Sink::Stdout => "<stdout>".to_string(),
            Sink::File(path) => path.display().to_string(),
        }
    }
}

/// Writes one entry per line to `sink`, hashing each entry with `hash` first.
pub fn write_lines(sink: &Sink, lines: &[String], hash: HashMode) -> Result<()> {
    match sink {
        Sink::Stdout => {
            let stdout = io::stdout();
            emit(stdout.lock(), lines, hash)
        }
        Sink::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output: {}", path.display()))?;
            emit(file, lines, hash)
                .with_context(|| format!("Failed to write output: {}", path.display()))
        }
    }
}

pub fn emit<W: Write>(writer: W, lines: &[String], hash: HashMode) -> Result<()> {
    let mut writer = BufWriter::new(writer);

    for line in lines {
        writeln!(writer, "{}", hash.apply(line))?;
    }

    writer.flush()?;
    Ok(())
}
