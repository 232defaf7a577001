use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::{BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};
use stx::driver::{Driver, RunConfig, read_symbols};
use stx::output;
use stx::tree::{SuffixTree, TreeConfig};
use stx::utils::logging;

#[derive(Parser)]
#[command(name = "stx")]
#[command(about = "Suffix tree construction and exact multi-pattern search")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    tree: TreeArgs,

    /// Log level when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Args)]
struct TreeArgs {
    /// Number of symbols; byte values 0..SIZE are accepted
    #[arg(long, global = true, default_value_t = TreeConfig::default().alphabet_size)]
    alphabet_size: usize,

    /// Terminator symbol appended to every text
    #[arg(long, global = true, default_value_t = TreeConfig::default().terminator as char)]
    terminator: char,
}

impl TreeArgs {
    fn config(&self) -> Result<TreeConfig> {
        let terminator = u8::try_from(self.terminator)
            .ok()
            .filter(u8::is_ascii)
            .with_context(|| format!("Terminator must be an ASCII character: {:?}", self.terminator))?;
        Ok(TreeConfig::new(self.alphabet_size, terminator)?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run every pattern against every text listed in a run file
    Run {
        /// Run file: text count, text files, pattern count, pattern files
        config: PathBuf,

        /// Write results to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search one text file for one or more patterns
    Search {
        /// Text file (newlines are dropped)
        text: PathBuf,

        /// Patterns to look for
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show statistics for the tree of a text file
    Stats {
        /// Text file (newlines are dropped)
        text: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print every edge of the tree of a text file
    Dump {
        /// Text file (newlines are dropped)
        text: PathBuf,
    },
}

#[derive(serde::Serialize)]
struct PatternResult {
    pattern: String,
    positions: Vec<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    let config = cli.tree.config()?;
    let color = std::io::stdout().is_terminal();

    match cli.command {
        Commands::Run {
            config: run_path,
            output: output_path,
            json,
        } => {
            let run = RunConfig::load(&run_path)?;
            let show_progress = std::io::stderr().is_terminal();
            let occurrences = Driver::new(config)
                .with_progress(show_progress)
                .run(&run)?;

            match (output_path, json) {
                (Some(path), _) => {
                    let file = File::create(&path)
                        .with_context(|| format!("Failed to create {}", path.display()))?;
                    let mut writer = BufWriter::new(file);
                    if json {
                        serde_json::to_writer_pretty(&mut writer, &occurrences)?;
                        writeln!(writer)?;
                    } else {
                        output::write_occurrences(&mut writer, &occurrences)?;
                    }
                    writer.flush()?;
                }
                (None, true) => output::print_json(&occurrences)?,
                (None, false) => output::print_occurrences(&occurrences, color)?,
            }
        }
        Commands::Search {
            text,
            patterns,
            json,
        } => {
            let tree = load_tree(&text, &config)?;

            let mut results = Vec::with_capacity(patterns.len());
            for pattern in patterns {
                let positions = tree
                    .find_all(pattern.as_bytes())
                    .with_context(|| format!("Invalid pattern {:?}", pattern))?;
                results.push(PatternResult { pattern, positions });
            }

            if json {
                output::print_json(&results)?;
            } else {
                for result in &results {
                    output::print_positions(result.pattern.as_bytes(), &result.positions, color)?;
                }
            }
        }
        Commands::Stats { text, json } => {
            let stats = load_tree(&text, &config)?.stats();
            if json {
                output::print_json(&stats)?;
            } else {
                output::print_stats(&stats)?;
            }
        }
        Commands::Dump { text } => {
            let tree = load_tree(&text, &config)?;
            output::print_tree(&tree, color)?;
        }
    }

    Ok(())
}

fn load_tree(path: &Path, config: &TreeConfig) -> Result<SuffixTree> {
    let content = read_symbols(path)?;
    SuffixTree::from_content(&content, config)
        .with_context(|| format!("Invalid text {}", path.display()))
}
