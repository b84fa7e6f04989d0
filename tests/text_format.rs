//! Text format tests: parsing, printing, round-trips.

use std::io::Write;

use edgewalk::types::error::GraphError;
use edgewalk::{
    adjacency_to_string, graphs_to_text, read_graphs, read_graphs_from_file, write_adjacency,
    Graph,
};
use tempfile::NamedTempFile;

const SAMPLE: &str = "1
5 7
0 1
0 4
1 2
1 3
1 4
2 3
3 4
";

#[test]
fn test_parse_and_print_sample() {
    let graphs = read_graphs(SAMPLE).unwrap();
    assert_eq!(graphs.len(), 1);
    let g = &graphs[0];
    assert_eq!(g.vertex_count(), 5);
    assert!(g.is_undirected());

    let expected = "\
0-> 1-> 4
1-> 0-> 2-> 3-> 4
2-> 1-> 3
3-> 1-> 2-> 4
4-> 0-> 1-> 3
";
    assert_eq!(adjacency_to_string(g), expected);
}

#[test]
fn test_parse_multiple_graphs() {
    let input = "2  3 1  0 1  2 1  0 0";
    let graphs = read_graphs(input).unwrap();
    assert_eq!(graphs.len(), 2);
    assert_eq!(graphs[0].vertex_count(), 3);
    assert_eq!(graphs[0].neighbours_of(0).unwrap(), &[1]);
    assert_eq!(graphs[1].vertex_count(), 2);
    // self-loop described in text lands twice in the list
    assert_eq!(graphs[1].neighbours_of(0).unwrap(), &[0, 0]);
}

#[test]
fn test_parse_empty_input() {
    match read_graphs("") {
        Err(GraphError::UnexpectedEof) => {}
        other => panic!("Expected UnexpectedEof, got {:?}", other),
    }
}

#[test]
fn test_parse_truncated_edge_list() {
    match read_graphs("1 3 2 0 1") {
        Err(GraphError::UnexpectedEof) => {}
        other => panic!("Expected UnexpectedEof, got {:?}", other),
    }
}

#[test]
fn test_parse_bad_token() {
    match read_graphs("1 x 0") {
        Err(GraphError::Parse(token)) => assert_eq!(token, "x"),
        other => panic!("Expected Parse, got {:?}", other),
    }
}

#[test]
fn test_parse_edge_endpoint_out_of_range() {
    match read_graphs("1 2 1 0 5") {
        Err(GraphError::VertexOutOfRange { vertex: 5, len: 2 }) => {}
        other => panic!("Expected VertexOutOfRange, got {:?}", other),
    }
}

#[test]
fn test_zero_graphs() {
    let graphs = read_graphs("0").unwrap();
    assert!(graphs.is_empty());
    assert_eq!(graphs_to_text(&graphs), "0\n");
}

#[test]
fn test_round_trip_preserves_neighbour_multisets() {
    let mut g = Graph::new(4);
    g.add_undirected_edge(0, 1).unwrap();
    g.add_undirected_edge(0, 1).unwrap(); // duplicate edge
    g.add_undirected_edge(1, 2).unwrap();
    g.add_undirected_edge(2, 2).unwrap(); // self-loop
    g.add_undirected_edge(3, 0).unwrap();

    let text = graphs_to_text(std::slice::from_ref(&g));
    let reparsed = read_graphs(&text).unwrap();
    assert_eq!(reparsed.len(), 1);
    let h = &reparsed[0];

    assert_eq!(h.vertex_count(), g.vertex_count());
    for v in 0..g.vertex_count() {
        let mut a = g.neighbours_of(v).unwrap().to_vec();
        let mut b = h.neighbours_of(v).unwrap().to_vec();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b, "neighbour multiset of {} changed", v);
    }
}

#[test]
fn test_round_trip_of_parsed_sample() {
    let graphs = read_graphs(SAMPLE).unwrap();
    let reparsed = read_graphs(&graphs_to_text(&graphs)).unwrap();
    // the sample has no duplicates, so adjacency comes back identical
    assert_eq!(
        adjacency_to_string(&reparsed[0]),
        adjacency_to_string(&graphs[0])
    );
}

#[test]
fn test_write_adjacency_matches_string_form() {
    let graphs = read_graphs(SAMPLE).unwrap();
    let mut buf = Vec::new();
    write_adjacency(&graphs[0], &mut buf).unwrap();
    assert_eq!(buf, adjacency_to_string(&graphs[0]).into_bytes());
}

#[test]
fn test_read_graphs_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let graphs = read_graphs_from_file(file.path()).unwrap();
    assert_eq!(graphs.len(), 1);
    assert_eq!(graphs[0].vertex_count(), 5);
}

#[test]
fn test_read_missing_file_is_io_error() {
    let result = read_graphs_from_file(std::path::Path::new("/nonexistent/graphs.txt"));
    match result {
        Err(GraphError::Io(_)) => {}
        other => panic!("Expected Io, got {:?}", other),
    }
}
