//! Run configuration
//!
//! A run is described by a plain-text file listing the texts and the
//! patterns to search for:
//!
//! ```text
//! 2
//! 1 text1.txt
//! 2 text2.txt
//! 1
//! 1 pattern1.txt
//! ```
//!
//! The first number is the text count, followed by one `<k> <file>` line per
//! text, then the pattern count and one line per pattern. Blank lines are
//! ignored. Relative file names resolve against the configuration file's
//! directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Files taking part in a multi-text, multi-pattern run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Text files, numbered from 1 in this order
    pub texts: Vec<PathBuf>,
    /// Pattern files, numbered from 1 in this order
    pub patterns: Vec<PathBuf>,
}

impl RunConfig {
    /// Load a run configuration from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read run config {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Self::parse(&contents, base)
            .with_context(|| format!("Invalid run config {}", path.display()))
    }

    /// Parse configuration text, resolving relative paths against `base`
    pub fn parse(contents: &str, base: &Path) -> Result<Self> {
        let mut lines = contents.lines().map(str::trim).filter(|l| !l.is_empty());

        let texts = read_section(&mut lines, "text", base)?;
        let patterns = read_section(&mut lines, "pattern", base)?;

        Ok(Self { texts, patterns })
    }
}

/// Read a count line followed by that many `<k> <file>` lines
fn read_section<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    kind: &str,
    base: &Path,
) -> Result<Vec<PathBuf>> {
    let count_line = lines
        .next()
        .with_context(|| format!("Missing {} count", kind))?;
    let count: usize = count_line
        .parse()
        .with_context(|| format!("Invalid {} count: {:?}", kind, count_line))?;

    let mut files = Vec::with_capacity(count);
    for k in 1..=count {
        let line = lines
            .next()
            .with_context(|| format!("Expected {} {} entries, found {}", count, kind, k - 1))?;
        let name = line
            .split_whitespace()
            .nth(1)
            .with_context(|| format!("Missing file name in {} entry {:?}", kind, line))?;

        let path = Path::new(name);
        files.push(if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        });
    }

    Ok(files)
}
