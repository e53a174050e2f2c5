use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use elscan::prepare::{self, PreparedText};
use elscan::search::types::Scan;
use elscan::{grid, output, search};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "elscan")]
#[command(about = "Letter-pattern search engine: equidistant, sequence, and chain searches")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read text from this file instead of stdin
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Keep literal spaces in the prepared text
    #[arg(long, global = true)]
    keep_spaces: bool,

    /// Emit results as JSON instead of colored text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Equidistant letter sequence search at a fixed skip or skip range
    Els {
        /// Term to search for
        term: String,

        /// Exact skip distance (shorthand for --min-skip N --max-skip N)
        #[arg(short, long)]
        skip: Option<usize>,

        /// Smallest skip to try
        #[arg(long, default_value_t = 1)]
        min_skip: usize,

        /// Largest skip to try
        #[arg(long, default_value_t = 1)]
        max_skip: usize,

        /// Search direction
        #[arg(short, long, value_enum, default_value_t = ScanArg::Forward)]
        direction: ScanArg,
    },
    /// Sequence search: triangular, square, or fibonacci letter spacing
    Seq {
        /// Term to search for
        term: String,

        /// Spacing formula
        #[arg(short = 't', long = "type")]
        kind: String,

        /// Search direction
        #[arg(short, long, value_enum, default_value_t = ScanArg::Forward)]
        direction: ScanArg,
    },
    /// Chain search: walk to the nearest occurrence of each letter in turn
    Chain {
        /// Term to search for
        term: String,

        /// Walk backwards through the text
        #[arg(short, long)]
        reverse: bool,

        /// Stop after this many chains (0 = unlimited)
        #[arg(short, long, default_value_t = 0)]
        max_results: usize,
    },
    /// Suggest rectangular grid layouts for the prepared letter count
    Grid {
        /// Letter count (defaults to the prepared text's length)
        count: Option<usize>,

        /// Always include common display widths
        #[arg(short, long)]
        common: bool,
    },
    /// Rank nearby letter counts by how well they factor
    Suggest {
        /// Letter count (defaults to the prepared text's length)
        count: Option<usize>,

        /// How far around the count to scan
        #[arg(short, long, default_value_t = 10)]
        range: usize,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScanArg {
    Forward,
    Reverse,
    Both,
}

impl From<ScanArg> for Scan {
    fn from(arg: ScanArg) -> Scan {
        match arg {
            ScanArg::Forward => Scan::Forward,
            ScanArg::Reverse => Scan::Reverse,
            ScanArg::Both => Scan::Both,
        }
    }
}

/// Load the raw text, prepare it, and fold everything to uppercase so
/// matching is case-blind.
fn load_text(cli: &Cli) -> Result<PreparedText> {
    let raw = match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    Ok(prepare::prepare(&raw, cli.keep_spaces).to_uppercase())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let color = !cli.json;

    match &cli.command {
        Commands::Els {
            term,
            skip,
            min_skip,
            max_skip,
            direction,
        } => {
            let text = load_text(&cli)?;
            let term = term.to_uppercase();
            let skips = match skip {
                Some(s) => *s..=*s,
                None => *min_skip..=*max_skip,
            };
            let summary =
                search::search_equidistant(&text, &term, skips, (*direction).into(), None);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                output::print_search_summary(&summary, color)?;
            }
        }
        Commands::Seq {
            term,
            kind,
            direction,
        } => {
            let text = load_text(&cli)?;
            let term = term.to_uppercase();
            let summary =
                search::search_sequence_named(&text, &term, kind, (*direction).into());
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                output::print_search_summary(&summary, color)?;
            }
        }
        Commands::Chain {
            term,
            reverse,
            max_results,
        } => {
            let text = load_text(&cli)?;
            let term = term.to_uppercase();
            let summary = search::search_chain(&text, &term, *reverse, *max_results);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                output::print_chain_summary(&summary, color)?;
            }
        }
        Commands::Grid { count, common } => {
            let n = match count {
                Some(n) => *n,
                None => load_text(&cli)?.len(),
            };
            let layouts = grid::grid_layouts(n, *common);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&layouts)?);
            } else {
                output::print_grid_layouts(&layouts, color)?;
            }
        }
        Commands::Suggest { count, range } => {
            let n = match count {
                Some(n) => *n,
                None => load_text(&cli)?.len(),
            };
            let suggestions = grid::suggest_better_counts(n, *range);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                output::print_count_suggestions(&suggestions, color)?;
            }
        }
    }

    Ok(())
}
