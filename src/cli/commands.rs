//! CLI command implementations.

use std::path::Path;

use crate::algo::{
    all_simple_paths, count_at_distance, distances_from, find_mother_vertex, k_core,
    transitive_closure,
};
use crate::graph::{bfs_for_each, dfs_for_each, Graph};
use crate::text::{adjacency_to_string, read_graphs_from_file};
use crate::types::{GraphError, GraphResult, UNREACHABLE};

/// Load one graph out of a description file.
fn load_graph(path: &Path, index: usize) -> GraphResult<Graph> {
    let mut graphs = read_graphs_from_file(path)?;
    let len = graphs.len();
    if index >= len {
        return Err(GraphError::GraphIndexOutOfRange { index, len });
    }
    Ok(graphs.swap_remove(index))
}

fn adjacency_rows(graph: &Graph) -> GraphResult<Vec<Vec<usize>>> {
    (0..graph.vertex_count())
        .map(|v| graph.neighbours_of(v).map(<[usize]>::to_vec))
        .collect()
}

/// Print the adjacency structure of a graph.
pub fn cmd_show(path: &Path, index: usize, json: bool) -> GraphResult<()> {
    let graph = load_graph(path, index)?;
    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "undirected": graph.is_undirected(),
            "adjacency": adjacency_rows(&graph)?,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        print!("{}", adjacency_to_string(&graph));
    }
    Ok(())
}

/// Print BFS discovery order from a start vertex.
pub fn cmd_bfs(path: &Path, index: usize, start: usize, json: bool) -> GraphResult<()> {
    let graph = load_graph(path, index)?;
    let mut order = Vec::new();
    bfs_for_each(&graph, start, |v| order.push(v))?;
    print_order("bfs", start, &order, json);
    Ok(())
}

/// Print DFS discovery order from a start vertex.
pub fn cmd_dfs(path: &Path, index: usize, start: usize, json: bool) -> GraphResult<()> {
    let graph = load_graph(path, index)?;
    let mut order = Vec::new();
    dfs_for_each(&graph, start, |v| order.push(v))?;
    print_order("dfs", start, &order, json);
    Ok(())
}

fn print_order(kind: &str, start: usize, order: &[usize], json: bool) {
    if json {
        let info = serde_json::json!({
            "traversal": kind,
            "start": start,
            "order": order,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        let rendered: Vec<String> = order.iter().map(usize::to_string).collect();
        println!("{}", rendered.join(" "));
    }
}

/// Search for a mother vertex.
pub fn cmd_mother(path: &Path, index: usize, json: bool) -> GraphResult<()> {
    let graph = load_graph(path, index)?;
    let mother = find_mother_vertex(&graph)?;
    if json {
        let info = serde_json::json!({ "mother_vertex": mother });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        match mother {
            Some(v) => println!("Mother vertex: {}", v),
            None => println!("No mother vertex"),
        }
    }
    Ok(())
}

/// Print the transitive closure matrix.
pub fn cmd_closure(path: &Path, index: usize, json: bool) -> GraphResult<()> {
    let graph = load_graph(path, index)?;
    let closure = transitive_closure(&graph);
    if json {
        let rows: Vec<&[i32]> = (0..closure.rows()).map(|r| closure.row(r)).collect();
        let info = serde_json::json!({ "closure": rows });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        for r in 0..closure.rows() {
            let rendered: Vec<String> = closure.row(r).iter().map(i32::to_string).collect();
            println!("{}", rendered.join(" "));
        }
    }
    Ok(())
}

/// Extract and print the k-core of the graph.
pub fn cmd_kcore(path: &Path, index: usize, k: usize, json: bool) -> GraphResult<()> {
    let graph = load_graph(path, index)?;
    let before = graph.vertex_count();
    let core = k_core(graph, k)?;
    if json {
        let info = serde_json::json!({
            "k": k,
            "vertices_before": before,
            "vertices_after": core.vertex_count(),
            "adjacency": adjacency_rows(&core)?,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!(
            "{}-core: {} of {} vertices remain",
            k,
            core.vertex_count(),
            before
        );
        print!("{}", adjacency_to_string(&core));
    }
    Ok(())
}

/// Print hop-count distances from a source vertex.
pub fn cmd_distances(path: &Path, index: usize, source: usize, json: bool) -> GraphResult<()> {
    let graph = load_graph(path, index)?;
    let distances = distances_from(&graph, source)?;
    if json {
        // null marks an unreachable vertex
        let rendered: Vec<Option<usize>> = distances
            .iter()
            .map(|&d| (d != UNREACHABLE).then_some(d))
            .collect();
        let info = serde_json::json!({
            "source": source,
            "distances": rendered,
            "unreachable": count_at_distance(&distances, UNREACHABLE),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        for (v, &d) in distances.iter().enumerate() {
            if d == UNREACHABLE {
                println!("{}: unreachable", v);
            } else {
                println!("{}: {}", v, d);
            }
        }
    }
    Ok(())
}

/// Enumerate all simple paths between two vertices.
pub fn cmd_paths(
    path: &Path,
    index: usize,
    source: usize,
    target: usize,
    json: bool,
) -> GraphResult<()> {
    let graph = load_graph(path, index)?;
    let paths = all_simple_paths(&graph, source, target)?;
    if json {
        let rendered: Vec<&[usize]> = paths.iter().map(|p| p.vertices()).collect();
        let info = serde_json::json!({
            "source": source,
            "target": target,
            "count": rendered.len(),
            "paths": rendered,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("{} paths from {} to {}", paths.len(), source, target);
        for p in &paths {
            println!("{}", p);
        }
    }
    Ok(())
}
