//! Natsort CLI - sort lines of text in natural order.
//!
//! The binary is a thin wrapper around [`run`], which takes its input and
//! output streams as parameters so it can be driven from tests.
//!
//! ```text
//! $ printf 'img12.png\nimg2.png\nimg10.png\n' | natsort
//! img2.png
//! img10.png
//! img12.png
//! ```

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use natsort::{CodePointCollator, Collator, Dir, NaturalComparator, SortOptions};

/// Sort lines of text in natural order.
#[derive(Debug, Parser)]
#[command(name = "natsort")]
#[command(version)]
#[command(about = "Sort lines of text in natural order (item2 before item10)")]
pub struct Cli {
    /// Files to read. Reads stdin when none are given or for `-`.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Sort in descending order.
    #[arg(short, long)]
    pub reverse: bool,

    /// Sort direction (ASC or DESC).
    #[arg(short, long, value_name = "DIR", conflicts_with = "reverse")]
    pub direction: Option<Dir>,

    /// Compare without case folding.
    #[arg(short, long)]
    pub case_sensitive: bool,

    /// Output only the first of lines that compare equal.
    #[arg(short, long)]
    pub unique: bool,

    /// JSON file with sort options. Flags take precedence.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Order non-ASCII text by code point instead of transliteration.
    #[arg(long)]
    pub ascii_collation: bool,
}

impl Cli {
    /// Resolves the effective sort options: config file first, then flags.
    pub fn options(&self) -> Result<SortOptions> {
        let mut options = match &self.config {
            Some(path) => load_options(path)?,
            None => SortOptions::default(),
        };
        if let Some(direction) = self.direction {
            options.direction = direction;
        }
        if self.reverse {
            options.direction = Dir::Desc;
        }
        if self.case_sensitive {
            options.case_sensitive = true;
        }
        Ok(options)
    }
}

/// Reads [`SortOptions`] from a JSON file.
pub fn load_options(path: &Path) -> Result<SortOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let options = serde_json::from_str(&text)
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?options, "loaded sort options");
    Ok(options)
}

/// Reads every input, sorts the lines and writes them to `out`.
pub fn run<R: BufRead, W: Write>(cli: &Cli, stdin: R, mut out: W) -> Result<()> {
    let options = cli.options()?;
    let lines = read_lines(&cli.files, stdin)?;
    tracing::debug!(lines = lines.len(), ?options, "sorting");

    let sorted = if cli.ascii_collation {
        sort_lines(
            &NaturalComparator::with_collator(options, CodePointCollator),
            lines,
            cli.unique,
        )
    } else {
        sort_lines(&NaturalComparator::new(options), lines, cli.unique)
    };

    for line in &sorted {
        writeln!(out, "{}", line).context("failed to write output")?;
    }
    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Sorts lines, optionally dropping lines equal to their predecessor.
pub fn sort_lines<C: Collator>(
    comparator: &NaturalComparator<C>,
    mut lines: Vec<String>,
    unique: bool,
) -> Vec<String> {
    comparator.sort(&mut lines);
    if unique {
        lines.dedup_by(|line, kept| comparator.compare(line.as_str(), kept.as_str()).is_eq());
    }
    lines
}

fn read_lines<R: BufRead>(files: &[PathBuf], stdin: R) -> Result<Vec<String>> {
    if files.is_empty() {
        return collect_lines(stdin).context("failed to read stdin");
    }

    let mut stdin = Some(stdin);
    let mut lines = Vec::new();
    for path in files {
        if path.as_os_str() == "-" {
            // stdin can only be drained once
            if let Some(reader) = stdin.take() {
                lines.extend(collect_lines(reader).context("failed to read stdin")?);
            }
            continue;
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        lines.extend(text.lines().map(str::to_string));
    }
    Ok(lines)
}

fn collect_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    reader.lines().collect()
}
