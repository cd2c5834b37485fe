use bidi_path_core::{bidirectional_search, shortest_path, Graph, NodeId, SearchError};
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1_000_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: bidi-path-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  tree        Ternary tree (one path between any pair)");
        println!("  grid        Square lattice (many equal-length routes)");
        println!("  smallworld  Ring lattice with a few random shortcuts");
        println!("  barbell     Two dense clusters joined by a thin bridge");
        println!();
        println!("Default node_count: 1000000");
        return;
    }

    if node_count < 16 {
        eprintln!("node_count must be at least 16, got {}", node_count);
        return;
    }

    println!("bidi-path-bench");
    println!("===============");
    println!();

    let generators: Vec<(&str, fn(u32) -> Graph)> = match mode {
        "tree" => vec![("Ternary tree", gen_tree)],
        "grid" => vec![("Square grid", gen_grid)],
        "smallworld" => vec![("Small-world ring", gen_small_world)],
        "barbell" => vec![("Barbell (cluster-bridge-cluster)", gen_barbell)],
        "all" => vec![
            ("Ternary tree", gen_tree as fn(u32) -> Graph),
            ("Square grid", gen_grid),
            ("Small-world ring", gen_small_world),
            ("Barbell (cluster-bridge-cluster)", gen_barbell),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, node_count);
    }
}

fn run_benchmark(name: &str, generator: fn(u32) -> Graph, node_count: u32) {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let t = Instant::now();
    let graph = generator(node_count);
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s: {} nodes, {} edges, ~{:.0}MB",
        gen_time.as_secs_f64(),
        graph.node_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    // First → last node, then a handful of deterministic random pairs
    let mut pairs = vec![(1, node_count)];
    let mut rng = FastRng::new(2024);
    for _ in 0..5 {
        let from = rng.next(node_count as u64) as u32 + 1;
        let to = rng.next(node_count as u64) as u32 + 1;
        pairs.push((from, to));
    }

    println!();
    println!(
        "{:>22} {:>9} {:>9} {:>10} {:>10} {:>10}",
        "pair", "bidi", "bfs", "visited", "bidi", "bfs"
    );
    println!(
        "{:>22} {:>9} {:>9} {:>10} {:>10} {:>10}",
        "", "hops", "hops", "", "time", "time"
    );
    println!(
        "{:->22} {:->9} {:->9} {:->10} {:->10} {:->10}",
        "", "", "", "", "", ""
    );

    for (from, to) in pairs {
        let start = NodeId::new(from);
        let end = NodeId::new(to);

        let t = Instant::now();
        let bidi = bidirectional_search(&graph, start, end);
        let bidi_time = t.elapsed();

        let t = Instant::now();
        let bfs = shortest_path(&graph, start, end);
        let bfs_time = t.elapsed();

        let (bidi_hops, visited) = match bidi {
            Ok(result) => (result.hops().to_string(), result.nodes_visited),
            Err(SearchError::NoPath { nodes_visited, .. }) => ("-".to_string(), nodes_visited),
            Err(e) => {
                eprintln!("{} → {}: {}", from, to, e);
                continue;
            }
        };
        let bfs_hops = bfs
            .map(|p| (p.len() - 1).to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:>22} {:>9} {:>9} {:>10} {:>8.1}ms {:>8.1}ms",
            format!("{} → {}", from, to),
            bidi_hops,
            bfs_hops,
            visited,
            bidi_time.as_secs_f64() * 1000.0,
            bfs_time.as_secs_f64() * 1000.0
        );
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators. Deterministic and single-threaded. They number nodes from 0
// internally; `link` shifts onto the graph's 1..=n.
// ---------------------------------------------------------------------------

/// Linear congruential generator, enough for reproducible layouts.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
}

fn link(graph: &mut Graph, a: u64, b: u64) {
    if let Err(e) = graph.add_edge(NodeId::new(a as u32 + 1), NodeId::new(b as u32 + 1)) {
        eprintln!("generator produced a bad edge: {}", e);
    }
}

/// Complete ternary tree in heap order: node `i` hangs off `(i - 1) / 3`.
///
/// There is exactly one route between two nodes, so both searches must
/// report the same hop count. Only the visited counts differ.
fn gen_tree(node_count: u32) -> Graph {
    let mut graph = Graph::with_nodes(node_count as usize);
    for child in 1..node_count as u64 {
        link(&mut graph, (child - 1) / 3, child);
    }
    graph
}

/// Square lattice, row-major, side `floor(sqrt(n))`. Leftover ids extend a
/// partial last row.
///
/// Corner to corner the DFS side snakes along rows, so the bidirectional
/// path can be much longer than the BFS one.
fn gen_grid(node_count: u32) -> Graph {
    let n = node_count as u64;
    let side = (n as f64).sqrt() as u64;
    let mut graph = Graph::with_nodes(node_count as usize);

    for id in 0..n {
        if (id + 1) % side != 0 && id + 1 < n {
            link(&mut graph, id, id + 1);
        }
        if id + side < n {
            link(&mut graph, id, id + side);
        }
    }

    graph
}

/// Ring where each node links to its next `k` neighbors, plus one random
/// shortcut per hundred nodes.
fn gen_small_world(node_count: u32) -> Graph {
    let n = node_count as u64;
    let k = 4u64;
    let mut graph = Graph::with_nodes(node_count as usize);
    let mut rng = FastRng::new(4242);

    for id in 0..n {
        for step in 1..=k {
            link(&mut graph, id, (id + step) % n);
        }
    }
    for _ in 0..n / 100 {
        let a = rng.next(n);
        let b = rng.next(n);
        if a != b {
            link(&mut graph, a, b);
        }
    }

    graph
}

/// Two random dense clusters joined by a ten-node chain. Node 1 sits in the
/// first cluster and node n in the second.
///
/// Both frontiers fill most of their own cluster before the bridge lets
/// them meet.
fn gen_barbell(node_count: u32) -> Graph {
    let n = node_count as u64;
    let bridge_len = 10u64;
    let cluster = (n - bridge_len) / 2;
    let mut graph = Graph::with_nodes(node_count as usize);
    let mut rng = FastRng::new(1717);

    fill_cluster(&mut graph, &mut rng, 0, cluster);
    // chain runs from the last id of the first cluster to the first id of
    // the second
    for id in cluster..cluster + bridge_len + 1 {
        link(&mut graph, id - 1, id);
    }
    fill_cluster(&mut graph, &mut rng, cluster + bridge_len, n - cluster - bridge_len);

    graph
}

/// Give each node in `first..first + len` up to eight random partners from
/// the same range, chained first so the cluster is connected.
fn fill_cluster(graph: &mut Graph, rng: &mut FastRng, first: u64, len: u64) {
    for i in 1..len {
        link(graph, first + i - 1, first + i);
    }
    for i in 0..len {
        for _ in 0..8 {
            let other = rng.next(len);
            if other != i {
                link(graph, first + i, first + other);
            }
        }
    }
}
