//! bidi-path: console front end for bidirectional path search.
//!
//! Loads a node/edge list (node count, node names, then name pairs), asks
//! for a start and end node unless they are given as flags, and prints the
//! path found together with the number of distinct nodes the search touched.
//!
//! Exit codes: 0 path found, 1 no path, 2 usage or unknown node,
//! 3 unreadable or malformed input, 4 console output failure.

use std::io::{self, Write};
use std::process::ExitCode;

use bidi_path_core::{bidirectional_search, SearchError};
use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod error;
mod load;
mod present;

use config::{Cli, OutputFormat, Settings};
use error::CliError;
use present::PathReport;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();

    let settings = Settings::from(cli);
    match run(&settings) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "bidi-path failed");
            eprintln!("bidi-path: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(settings: &Settings) -> Result<ExitCode, CliError> {
    settings.validate()?;
    let loaded = load::load_graph(&settings.input, settings.max_nodes)?;

    let stdin = io::stdin();
    let mut prompter = present::Prompter::new(stdin.lock());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut stderr = io::stderr();

    // Keep prompts out of stdout when stdout carries JSON
    let prompts: &mut dyn Write = match settings.format {
        OutputFormat::Text => &mut out,
        OutputFormat::Json => &mut stderr,
    };
    let from = match &settings.from {
        Some(name) => name.clone(),
        None => prompter.prompt(&mut *prompts, "start")?,
    };
    let to = match &settings.to {
        Some(name) => name.clone(),
        None => prompter.prompt(&mut *prompts, "end")?,
    };

    let start = present::resolve_node(&loaded.names, &from)?;
    let end = present::resolve_node(&loaded.names, &to)?;

    let report = match bidirectional_search(&loaded.graph, start, end) {
        Ok(result) => PathReport::found(&loaded.names, &from, &to, &result),
        Err(SearchError::NoPath { nodes_visited, .. }) => {
            PathReport::not_found(&from, &to, nodes_visited)
        }
        Err(e) => return Err(e.into()),
    };

    match settings.format {
        OutputFormat::Text => present::render_text(&mut out, &report)?,
        OutputFormat::Json => present::render_json(&mut out, &report)?,
    }
    out.flush()?;

    Ok(if report.found {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
