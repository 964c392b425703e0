use adjacency_graphs::graph::{AdjacencyGraph, BaseGraph, Edge, MutableGraph};
use adjacency_graphs::log::{build_logger_for_level, level_for_verbosity};
use adjacency_graphs::{erdoes_gallai, GraphError};
use log::info;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "adjacency-graphs-demo",
    about = "Runs the graph queries on a fixed sample graph and prints the results."
)]
struct Opt {
    /// Log verbosity, repeat for more (-v info, -vv debug, -vvv trace).
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn main() -> Result<(), GraphError> {
    let opt = Opt::from_args();
    build_logger_for_level(level_for_verbosity(opt.verbose));

    let mut graph = AdjacencyGraph::from(vec![
        ("a", vec!["d"]),
        ("b", vec!["c"]),
        ("c", vec!["b", "c", "d", "e"]),
        ("d", vec!["a", "c"]),
        ("e", vec!["c"]),
        ("f", vec![]),
    ]);
    info!(
        "sample graph with {} vertices and {} edges",
        graph.order(),
        graph.size()
    );
    println!("{}", graph);

    for u in graph.vertices() {
        println!("{}", graph.vertex_degree(u)?);
    }

    println!("List of isolated vertices:");
    println!("{:?}", graph.find_isolated_vertices());
    println!("A path from \"a\" to \"e\":");
    println!("{:?}", graph.find_path(&"a", &"e"));
    println!("All paths from \"a\" to \"e\":");
    println!("{:?}", graph.find_all_paths(&"a", &"e"));
    println!("The maximum degree of the graph is:");
    println!("{}", graph.max_delta()?);
    println!("The minimum degree of the graph is:");
    println!("{}", graph.min_delta()?);
    println!("Edges:");
    println!("{:?}", graph.edges());
    println!("Degree Sequence: ");
    println!("{:?}", graph.degree_sequence());

    let fulfilling: [&[usize]; 3] = [&[2, 2, 2, 2, 1, 1], &[3, 3, 3, 3, 3, 3], &[3, 3, 2, 1, 1]];
    let non_fulfilling: [&[usize]; 3] = [
        &[4, 3, 2, 2, 2, 1, 1],
        &[6, 6, 5, 4, 4, 2, 1],
        &[3, 3, 3, 1],
    ];
    for sequence in fulfilling.iter().chain(non_fulfilling.iter()) {
        println!("{:?} {}", sequence, erdoes_gallai(sequence));
    }

    println!("Add vertex 'z':");
    graph.add_vertex("z");
    println!("{}", graph);
    println!("Add edge ('x','y'): ");
    graph.add_edge(Edge("x", "y"));
    println!("{}", graph);
    println!("Add edge ('a','d'): ");
    graph.add_edge(Edge("a", "d"));
    println!("{}", graph);
    Ok(())
}
