//! `toml2json` CLI — convert a TOML file into JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Pretty-printed JSON (2-space indent, sorted keys) on stdout
//! toml2json Cargo.toml
//!
//! # Wider indent
//! toml2json --indent 4 config.toml
//!
//! # Single-line output
//! toml2json --compact config.toml
//!
//! # Write to a file instead of stdout
//! toml2json config.toml -o config.json
//!
//! # Trace the pipeline on stderr
//! RUST_LOG=debug toml2json config.toml
//! ```
//!
//! Exits 0 on success, 1 if the file cannot be read or converted (message on
//! stderr, nothing on stdout), and 2 on usage errors.

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use toml_json_core::{OutputStyle, DEFAULT_INDENT, MAX_INDENT};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "toml2json",
    version,
    about = "Convert a TOML file into JSON with sorted keys"
)]
struct Cli {
    /// TOML file to convert
    file: PathBuf,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Spaces per nesting level in pretty output (0-16)
    #[arg(
        long,
        default_value_t = DEFAULT_INDENT,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_INDENT as u64),
        conflicts_with = "compact"
    )]
    indent: usize,

    /// Emit single-line JSON instead of pretty-printing
    #[arg(long)]
    compact: bool,
}

impl Cli {
    fn style(&self) -> OutputStyle {
        if self.compact {
            OutputStyle::Compact
        } else {
            OutputStyle::pretty(self.indent)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    debug!(?cli, "parsed arguments");
    let json = toml_json_core::convert_with(&cli.file, cli.style())?;
    write_output(cli.output.as_deref(), &json)
}

/// Log to stderr so stdout carries nothing but JSON. `RUST_LOG` overrides
/// the default `warn` level.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            debug!(path = %path.display(), bytes = content.len(), "wrote output file");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
