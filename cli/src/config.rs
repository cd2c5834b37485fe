use std::path::PathBuf;

use clap::Parser;

use crate::error::SettingsError;

pub const DEFAULT_INPUT: &str = "input.txt";

pub const DEFAULT_MAX_NODES: usize = 1_000_000;
const MAX_NODES_MIN: usize = 1;
const MAX_NODES_MAX: usize = 50_000_000;

/// Find a path between two named nodes of an undirected graph
#[derive(Debug, Parser)]
#[command(name = "bidi-path")]
#[command(version)]
#[command(about = "Bidirectional (BFS from the start, DFS from the end) path search")]
pub struct Cli {
    /// Node/edge list; takes the place of --input when given
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Node/edge list: a node count, that many names, then name pairs
    #[arg(short, long, env = "BIDI_PATH_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Refuse inputs that declare more nodes than this
    #[arg(long, env = "BIDI_PATH_MAX_NODES", default_value_t = DEFAULT_MAX_NODES)]
    pub max_nodes: usize,

    /// Start node name (prompted for when omitted)
    #[arg(long)]
    pub from: Option<String>,

    /// End node name (prompted for when omitted)
    #[arg(long)]
    pub to: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Resolved settings for one run. Flags win over environment variables,
/// which win over the compiled defaults. A positional input file counts as
/// a flag and wins over `--input`.
#[derive(Debug, Clone)]
pub struct Settings {
    pub input: PathBuf,
    pub max_nodes: usize,
    pub from: Option<String>,
    pub to: Option<String>,
    pub format: OutputFormat,
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.input.as_os_str().is_empty() {
            return Err(SettingsError::EmptyInput);
        }
        check_range("max_nodes", self.max_nodes, MAX_NODES_MIN, MAX_NODES_MAX)
    }
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.file.unwrap_or(cli.input),
            max_nodes: cli.max_nodes,
            from: cli.from,
            to: cli.to,
            format: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }
}

fn check_range(
    name: &'static str,
    value: usize,
    min: usize,
    max: usize,
) -> Result<(), SettingsError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(SettingsError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}
