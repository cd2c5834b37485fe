use std::path::Path;
use std::time::Instant;

use bidi_path_core::{Graph, NodeId, NodeNames};
use tracing::{debug, info, warn};

use crate::error::LoadError;

/// A graph together with the name table that labels its nodes.
pub struct LoadedGraph {
    pub graph: Graph,
    pub names: NodeNames,
}

/// Read and parse a node/edge list from `path`.
pub fn load_graph(path: &Path, max_nodes: usize) -> Result<LoadedGraph, LoadError> {
    let start = Instant::now();

    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let loaded = parse_graph(&text, max_nodes)?;

    info!(
        path = %path.display(),
        nodes = loaded.graph.node_count(),
        edges = loaded.graph.edge_count(),
        load_time_ms = start.elapsed().as_secs_f64() * 1000.0,
        "graph loaded"
    );
    Ok(loaded)
}

/// Parse whitespace-separated tokens: a node count `n`, then `n` node names,
/// then any number of `name name` edge pairs up to end of input.
pub fn parse_graph(text: &str, max_nodes: usize) -> Result<LoadedGraph, LoadError> {
    let mut tokens = text.split_whitespace();

    let count = parse_count(tokens.next())?;
    if count > max_nodes {
        return Err(LoadError::TooManyNodes {
            count,
            max: max_nodes,
        });
    }

    let names = load_names(&mut tokens, count)?;
    let mut graph = Graph::with_nodes(count);
    load_edges(&mut tokens, &names, &mut graph)?;

    Ok(LoadedGraph { graph, names })
}

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

fn parse_count(token: Option<&str>) -> Result<usize, LoadError> {
    let token = token.ok_or(LoadError::MissingCount)?;
    token
        .parse::<usize>()
        .map_err(|_| LoadError::BadCount(token.to_string()))
}

fn load_names<'a, I>(tokens: &mut I, count: usize) -> Result<NodeNames, LoadError>
where
    I: Iterator<Item = &'a str>,
{
    let mut names = NodeNames::with_capacity(count);
    for found in 0..count {
        let Some(name) = tokens.next() else {
            return Err(LoadError::MissingNames {
                expected: count,
                found,
            });
        };
        names.insert(name)?;
    }
    Ok(names)
}

// ---------------------------------------------------------------------------
// Edges
// ---------------------------------------------------------------------------

fn load_edges<'a, I>(tokens: &mut I, names: &NodeNames, graph: &mut Graph) -> Result<(), LoadError>
where
    I: Iterator<Item = &'a str>,
{
    let mut index = 0usize;
    while let Some(first) = tokens.next() {
        index += 1;
        let Some(second) = tokens.next() else {
            return Err(LoadError::DanglingEdge(first.to_string()));
        };

        let a = resolve(names, first, index)?;
        let b = resolve(names, second, index)?;

        if a == b {
            warn!(edge = index, node = first, "skipping self-loop");
            continue;
        }
        if !graph.add_edge(a, b)? {
            debug!(edge = index, from = first, to = second, "duplicate edge");
        }
    }
    Ok(())
}

fn resolve(names: &NodeNames, name: &str, index: usize) -> Result<NodeId, LoadError> {
    names.resolve(name).ok_or_else(|| LoadError::UnknownNode {
        index,
        name: name.to_string(),
    })
}
