//! Command-line surface
//!
//! `namegrind <INPUT> [OUTPUT]` reads names (or raw lines in dedupe-only
//! mode), builds the wordlist and writes it, optionally hashed.

use anyhow::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::core::config::Config;
use crate::core::hash::HashMode;
use crate::core::input::{self, Source, STDIO_MARKER};
use crate::core::output::{self, Sink};
use crate::core::wordlist::{self, Mode, Wordlist};

/// Generate password-guess wordlists from a list of names.
#[derive(Parser, Debug)]
#[command(name = "namegrind", version, about, long_about = None)]
pub struct Cli {
    /// Name list, one per line ("-" for stdin)
    #[arg(required_unless_present = "write_config")]
    pub input: Option<String>,

    /// Destination file ("-" for stdout)
    #[arg(default_value = STDIO_MARKER)]
    pub output: String,

    /// Do not print the summary line
    #[arg(short, long)]
    pub quiet: bool,

    /// Print only the number of unique entries
    #[arg(short, long)]
    pub count: bool,

    /// Deduplicate the input lines without generating variants
    #[arg(short, long)]
    pub dedupe_only: bool,

    /// Hash every entry before output: none, md5, sha1
    #[arg(long, value_name = "MODE")]
    pub hash: Option<String>,

    /// Alternate configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the default configuration file and exit
    #[arg(long)]
    pub write_config: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.dedupe_only {
            Mode::DedupeOnly
        } else {
            Mode::Generate
        }
    }

    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::default_path(),
        }
    }
}

/// Effective settings after merging flags, environment and config file
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub source: Source,
    pub sink: Sink,
    pub mode: Mode,
    pub hash: HashMode,
    pub count_only: bool,
    pub quiet: bool,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self> {
        let hash = config.resolve_hash(cli.hash.as_deref())?;
        let input = cli.input.as_deref().unwrap_or(STDIO_MARKER);

        Ok(Self {
            source: Source::parse(input),
            sink: Sink::parse(&cli.output),
            mode: cli.mode(),
            hash,
            count_only: cli.count,
            quiet: cli.quiet || config.output.quiet,
        })
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config_path()?;

    if cli.write_config {
        return cmd_write_config(&config_path);
    }

    let config = Config::load(&config_path)?;
    let settings = Settings::resolve(&cli, &config)?;
    cmd_generate(&settings)
}

/// Write the default configuration file
pub fn cmd_write_config(path: &std::path::Path) -> Result<()> {
    Config::default().save(path)?;
    println!("✅ Config written to {}", path.display());
    Ok(())
}

/// Build the wordlist and write it, or only report its size
pub fn cmd_generate(settings: &Settings) -> Result<()> {
    log::info!(
        "reading {} ({:?} mode)",
        settings.source.describe(),
        settings.mode
    );
    let lines = input::read_lines(&settings.source)?;
    let name_count = lines.len();
    let wordlist = wordlist::run(settings.mode, lines);

    if settings.count_only {
        println!("{}", wordlist.len());
        return Ok(());
    }

    log::info!(
        "writing {} entries to {} (hash: {})",
        wordlist.len(),
        settings.sink.describe(),
        settings.hash
    );
    output::write_lines(&settings.sink, &wordlist.entries, settings.hash)?;

    if !settings.quiet {
        eprintln!("{}", summary(&wordlist, name_count, settings.mode));
    }

    Ok(())
}

fn summary(wordlist: &Wordlist, line_count: usize, mode: Mode) -> String {
    let unit = match mode {
        Mode::Generate => "names",
        Mode::DedupeOnly => "lines",
    };
    format!(
        "[+] Wrote {} entries ({} {}, {} duplicates removed)",
        wordlist.len(),
        line_count,
        unit,
        wordlist.duplicates_removed()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::WordlistError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("namegrind").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["names.txt"]);

        assert_eq!(cli.input.as_deref(), Some("names.txt"));
        assert_eq!(cli.output, "-");
        assert!(!cli.quiet && !cli.count && !cli.dedupe_only);
        assert_eq!(cli.mode(), Mode::Generate);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_flags() {
        let cli = parse(&["-", "out.txt", "-q", "-c", "-d", "--hash", "md5", "-vv"]);

        assert!(cli.quiet && cli.count);
        assert_eq!(cli.mode(), Mode::DedupeOnly);
        assert_eq!(cli.hash.as_deref(), Some("md5"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_input_required() {
        assert!(Cli::try_parse_from(["namegrind"]).is_err());
        assert!(Cli::try_parse_from(["namegrind", "--write-config"]).is_ok());
    }

    #[test]
    fn test_unknown_hash_is_accepted_by_parser() {
        let cli = parse(&["names.txt", "--hash", "sha512"]);
        let err = Settings::resolve(&cli, &Config::default()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<WordlistError>(),
            Some(WordlistError::UnsupportedHash(_))
        ));
    }

    #[test]
    fn test_settings_resolve() {
        let cli = parse(&["names.txt", "out.txt", "--hash", "sha1"]);
        let mut config = Config::default();
        config.output.quiet = true;

        let settings = Settings::resolve(&cli, &config).unwrap();

        assert_eq!(settings.source, Source::File("names.txt".into()));
        assert_eq!(settings.sink, Sink::File("out.txt".into()));
        assert_eq!(settings.hash, HashMode::Sha1);
        assert!(settings.quiet);
        assert!(!settings.count_only);
    }

    #[test]
    fn test_summary_line() {
        let wordlist = wordlist::run(Mode::DedupeOnly, vec!["a".into(), "a".into(), "b".into()]);

        assert_eq!(
            summary(&wordlist, 3, Mode::DedupeOnly),
            "[+] Wrote 2 entries (3 lines, 1 duplicates removed)"
        );
    }
}
