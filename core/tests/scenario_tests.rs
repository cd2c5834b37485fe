use bidi_path_core::{bidirectional_search, Graph, NodeNames, SearchError};

/// Build a graph and its name table from node names and name pairs.
fn named_graph(nodes: &[&str], edges: &[(&str, &str)]) -> (Graph, NodeNames) {
    let mut names = NodeNames::with_capacity(nodes.len());
    for name in nodes {
        names.insert(name).expect("unique name");
    }
    let mut graph = Graph::with_nodes(names.len());
    for (a, b) in edges {
        let a = names.resolve(a).expect("known node");
        let b = names.resolve(b).expect("known node");
        graph.add_edge(a, b).expect("edge");
    }
    (graph, names)
}

fn search_names(graph: &Graph, names: &NodeNames, from: &str, to: &str) -> Result<Vec<String>, SearchError> {
    let start = names.resolve(from).expect("start");
    let end = names.resolve(to).expect("end");
    bidirectional_search(graph, start, end).map(|r| names.render_path(&r.path))
}

#[test]
fn test_chain_a_to_e() {
    let (g, names) = named_graph(
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "E")],
    );
    assert_eq!(
        search_names(&g, &names, "A", "E").unwrap(),
        vec!["A", "B", "C", "D", "E"]
    );
}

#[test]
fn test_isolated_node_has_no_path() {
    let (g, names) = named_graph(&["A", "B", "C"], &[("A", "B")]);
    let err = search_names(&g, &names, "A", "C").unwrap_err();
    assert!(matches!(err, SearchError::NoPath { .. }));
}

#[test]
fn test_star_leaf_to_leaf() {
    let (g, names) = named_graph(
        &["X", "P", "Q", "R"],
        &[("X", "P"), ("X", "Q"), ("X", "R")],
    );
    assert_eq!(search_names(&g, &names, "P", "Q").unwrap(), vec!["P", "X", "Q"]);
}

#[test]
fn test_same_city() {
    let (g, names) = named_graph(&["Arad", "Sibiu"], &[("Arad", "Sibiu")]);
    let start = names.resolve("Arad").unwrap();
    let result = bidirectional_search(&g, start, start).unwrap();
    assert_eq!(names.render_path(&result.path), vec!["Arad"]);
    assert_eq!(result.nodes_visited, 1);
}

#[test]
fn test_romania_subset_is_valid_walk() {
    let (g, names) = named_graph(
        &[
            "Arad", "Zerind", "Oradea", "Sibiu", "Timisoara", "Lugoj", "Mehadia",
            "Fagaras", "Rimnicu", "Pitesti", "Bucharest",
        ],
        &[
            ("Arad", "Zerind"),
            ("Zerind", "Oradea"),
            ("Oradea", "Sibiu"),
            ("Arad", "Sibiu"),
            ("Arad", "Timisoara"),
            ("Timisoara", "Lugoj"),
            ("Lugoj", "Mehadia"),
            ("Sibiu", "Fagaras"),
            ("Sibiu", "Rimnicu"),
            ("Rimnicu", "Pitesti"),
            ("Pitesti", "Bucharest"),
            ("Fagaras", "Bucharest"),
        ],
    );
    let start = names.resolve("Arad").unwrap();
    let end = names.resolve("Bucharest").unwrap();
    let result = bidirectional_search(&g, start, end).unwrap();

    assert_eq!(result.path.first(), Some(&start));
    assert_eq!(result.path.last(), Some(&end));
    for pair in result.path.windows(2) {
        assert!(g.has_edge(pair[0], pair[1]));
    }
    assert!(result.nodes_visited <= names.len());
}
