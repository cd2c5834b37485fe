use std::collections::VecDeque;
use std::io::{BufRead, Write};

use bidi_path_core::{NodeId, NodeNames, PathResult};
use serde::Serialize;

use crate::error::CliError;

/// Reads node names from console input one whitespace-delimited token at a
/// time. Tokens left over on a line are kept for the next prompt, so both
/// names may be given on one line.
pub struct Prompter<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Prompter<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Ask for a node name and return the next token. Blank lines are
    /// skipped; end of input is an error.
    pub fn prompt<W>(&mut self, output: &mut W, label: &'static str) -> Result<String, CliError>
    where
        W: Write + ?Sized,
    {
        writeln!(output, "Enter {} node:", label)?;
        output.flush()?;

        let mut line = String::new();
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(CliError::MissingInput(label));
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// Look a node up by name.
pub fn resolve_node(names: &NodeNames, name: &str) -> Result<NodeId, CliError> {
    names
        .resolve(name)
        .ok_or_else(|| CliError::UnknownNode(name.to_string()))
}

/// Outcome of one search, with ids translated back to names.
#[derive(Debug, Serialize)]
pub struct PathReport {
    pub start: String,
    pub end: String,
    pub found: bool,
    pub nodes_visited: usize,
    pub path: Vec<String>,
}

impl PathReport {
    pub fn found(names: &NodeNames, start: &str, end: &str, result: &PathResult) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            found: true,
            nodes_visited: result.nodes_visited,
            path: names.render_path(&result.path),
        }
    }

    pub fn not_found(start: &str, end: &str, nodes_visited: usize) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            found: false,
            nodes_visited,
            path: Vec::new(),
        }
    }
}

pub fn render_text<W: Write + ?Sized>(out: &mut W, report: &PathReport) -> Result<(), CliError> {
    if report.found {
        writeln!(out, "Number of distinct nodes traversed: {}", report.nodes_visited)?;
        writeln!(out, "Path: {}", report.path.join(" "))?;
    } else {
        writeln!(
            out,
            "No path between {} and {} ({} distinct nodes traversed)",
            report.start, report.end, report.nodes_visited
        )?;
    }
    Ok(())
}

pub fn render_json<W: Write + ?Sized>(out: &mut W, report: &PathReport) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn names(list: &[&str]) -> NodeNames {
        let mut names = NodeNames::new();
        for name in list {
            names.insert(name).unwrap();
        }
        names
    }

    fn sample_result() -> PathResult {
        PathResult {
            path: vec![NodeId::new(2), NodeId::new(1), NodeId::new(3)],
            meeting: NodeId::new(1),
            nodes_visited: 3,
        }
    }

    #[test]
    fn test_prompt_reads_token() {
        let mut prompter = Prompter::new(Cursor::new("  Arad  \n"));
        let mut output = Vec::new();
        let name = prompter.prompt(&mut output, "start").unwrap();
        assert_eq!(name, "Arad");
        assert_eq!(String::from_utf8(output).unwrap(), "Enter start node:\n");
    }

    #[test]
    fn test_prompt_skips_blank_lines() {
        let mut prompter = Prompter::new(Cursor::new("\n   \nSibiu\n"));
        let mut output = Vec::new();
        assert_eq!(prompter.prompt(&mut output, "end").unwrap(), "Sibiu");
    }

    #[test]
    fn test_prompt_both_names_on_one_line() {
        let mut prompter = Prompter::new(Cursor::new("Arad Sibiu\n"));
        let mut output = Vec::new();
        assert_eq!(prompter.prompt(&mut output, "start").unwrap(), "Arad");
        assert_eq!(prompter.prompt(&mut output, "end").unwrap(), "Sibiu");
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Enter start node:\nEnter end node:\n"
        );
    }

    #[test]
    fn test_prompt_eof() {
        let mut prompter = Prompter::new(Cursor::new(""));
        let mut output = Vec::new();
        assert!(matches!(
            prompter.prompt(&mut output, "end"),
            Err(CliError::MissingInput("end"))
        ));
    }

    #[test]
    fn test_prompt_eof_after_one_name() {
        let mut prompter = Prompter::new(Cursor::new("Arad"));
        let mut output = Vec::new();
        assert_eq!(prompter.prompt(&mut output, "start").unwrap(), "Arad");
        assert!(matches!(
            prompter.prompt(&mut output, "end"),
            Err(CliError::MissingInput("end"))
        ));
    }

    #[test]
    fn test_resolve_node() {
        let names = names(&["X", "P"]);
        assert_eq!(resolve_node(&names, "P").unwrap(), NodeId::new(2));
        assert!(matches!(
            resolve_node(&names, "Q"),
            Err(CliError::UnknownNode(name)) if name == "Q"
        ));
    }

    #[test]
    fn test_render_text_found() {
        let names = names(&["X", "P", "Q"]);
        let report = PathReport::found(&names, "P", "Q", &sample_result());
        let mut out = Vec::new();
        render_text(&mut out, &report).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Number of distinct nodes traversed: 3\nPath: P X Q\n"
        );
    }

    #[test]
    fn test_render_text_not_found() {
        let report = PathReport::not_found("A", "C", 3);
        let mut out = Vec::new();
        render_text(&mut out, &report).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No path between A and C (3 distinct nodes traversed)\n"
        );
    }

    #[test]
    fn test_render_json() {
        let names = names(&["X", "P", "Q"]);
        let report = PathReport::found(&names, "P", "Q", &sample_result());
        let mut out = Vec::new();
        render_json(&mut out, &report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["found"], true);
        assert_eq!(value["nodes_visited"], 3);
        assert_eq!(value["path"], serde_json::json!(["P", "X", "Q"]));
    }
}
