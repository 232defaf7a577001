//! Multi-text, multi-pattern search runs
//!
//! Builds one independent suffix tree per text and runs every pattern
//! against every tree. Trees share no state, so they are built and queried
//! in parallel.

pub mod config;

pub use config::RunConfig;

use crate::tree::{SuffixTree, TreeConfig};
use crate::utils::progress::{ProgressBar, ProgressStyle};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// One exact occurrence of a pattern in a text
///
/// All numbers are 1-based, as written to the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Pattern number
    pub pattern: usize,
    /// Text number
    pub text: usize,
    /// Position of the first matched symbol in the text
    pub position: usize,
}

/// Runs searches with a fixed tree configuration
pub struct Driver {
    config: TreeConfig,
    show_progress: bool,
}

impl Driver {
    /// Create a driver; building fails early if `config` is unusable
    pub fn new(config: TreeConfig) -> Self {
        Self {
            config,
            show_progress: false,
        }
    }

    /// Show a progress bar while building trees
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Load every file named by `run`, build the trees and search them
    pub fn run(&self, run: &RunConfig) -> Result<Vec<Occurrence>> {
        let texts = run
            .texts
            .iter()
            .map(|path| read_symbols(path))
            .collect::<Result<Vec<_>>>()?;
        let patterns = run
            .patterns
            .iter()
            .map(|path| read_symbols(path))
            .collect::<Result<Vec<_>>>()?;

        let trees = self.build_trees(&texts)?;
        self.search(&trees, &patterns)
    }

    /// Build one tree per text, appending the terminator to each
    pub fn build_trees(&self, texts: &[Vec<u8>]) -> Result<Vec<SuffixTree>> {
        self.config.validate()?;
        info!(texts = texts.len(), "building suffix trees");

        let pb = if self.show_progress {
            let pb = ProgressBar::new(texts.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} trees")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            Some(pb)
        } else {
            None
        };

        let trees = texts
            .par_iter()
            .enumerate()
            .map(|(i, content)| -> Result<SuffixTree> {
                let tree = SuffixTree::from_content(content, &self.config)
                    .with_context(|| format!("Invalid text {}", i + 1))?;
                if let Some(pb) = &pb {
                    pb.inc(1);
                }
                Ok(tree)
            })
            .collect::<Result<Vec<_>>>()?;

        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        Ok(trees)
    }

    /// Run every pattern against every tree
    ///
    /// Results are ordered by pattern, then text, then position.
    pub fn search(&self, trees: &[SuffixTree], patterns: &[Vec<u8>]) -> Result<Vec<Occurrence>> {
        let per_pattern = patterns
            .par_iter()
            .enumerate()
            .map(|(p, pattern)| -> Result<Vec<Occurrence>> {
                let mut found = Vec::new();
                for (t, tree) in trees.iter().enumerate() {
                    let positions = tree
                        .find_all(pattern)
                        .with_context(|| format!("Invalid pattern {}", p + 1))?;
                    debug!(pattern = p + 1, text = t + 1, hits = positions.len(), "searched");

                    found.extend(positions.into_iter().map(|offset| Occurrence {
                        pattern: p + 1,
                        text: t + 1,
                        position: offset + 1,
                    }));
                }
                Ok(found)
            })
            .collect::<Result<Vec<_>>>()?;

        let occurrences: Vec<Occurrence> = per_pattern.into_iter().flatten().collect();
        info!(
            patterns = patterns.len(),
            texts = trees.len(),
            occurrences = occurrences.len(),
            "search complete"
        );

        Ok(occurrences)
    }
}

/// Read a text or pattern file, dropping every line break (`\n` and `\r`)
pub fn read_symbols(path: &Path) -> Result<Vec<u8>> {
    let mut symbols =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    symbols.retain(|&b| b != b'\n' && b != b'\r');
    Ok(symbols)
}
