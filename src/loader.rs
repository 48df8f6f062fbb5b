//! Convenience methods for loading graphs.
//!
//! Graph files are whitespace separated text. A line with a single token declares a vertex, a
//! line `source target weight` adds an edge, and lines starting with `#` are comments. Edges may
//! only reference vertices declared on an earlier line, unless the loader declares them
//! implicitly.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::distance::Weight;
use crate::error::Error as GraphError;
use crate::graph::Graph;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read graph: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: {source}")]
    Graph { line: usize, source: GraphError<String> },
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GraphLoader {
    implicit_vertices: bool,
}

impl GraphLoader {
    pub fn new() -> GraphLoader {
        GraphLoader::default()
    }

    /// Declare edge endpoints on first use instead of rejecting undeclared ones.
    pub fn implicit_vertices(mut self, implicit: bool) -> GraphLoader {
        self.implicit_vertices = implicit;
        self
    }

    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Graph<String>, LoadError> {
        let file = File::open(path.as_ref())?;
        self.load(BufReader::new(file))
    }

    pub fn load<R: BufRead>(&self, reader: R) -> Result<Graph<String>, LoadError> {
        let mut graph = Graph::new();
        for (index, read_line) in reader.lines().enumerate() {
            let line = read_line?;
            let number = index + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let tokens: Vec<&str> = trimmed.split_whitespace().collect();
            match tokens.as_slice() {
                [vertex] => graph.add_vertex((*vertex).to_string()),
                [from, to, weight] => {
                    let weight: Weight = weight.parse().map_err(|_| LoadError::Parse {
                        line: number,
                        message: format!("invalid weight {:?}", weight),
                    })?;
                    if self.implicit_vertices {
                        graph.add_vertex((*from).to_string());
                        graph.add_vertex((*to).to_string());
                    }
                    graph
                        .add_edge((*from).to_string(), (*to).to_string(), weight)
                        .map_err(|source| LoadError::Graph { line: number, source })?;
                }
                _ => {
                    return Err(LoadError::Parse {
                        line: number,
                        message: format!(
                            "expected `vertex` or `source target weight`, found {} tokens",
                            tokens.len()
                        ),
                    })
                }
            }
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKED_EXAMPLE: &str = "\
# vertices
A
B
C

# edges
A B 3
B C -2
A C 5
";

    #[test]
    fn loads_declared_graph() {
        let graph = GraphLoader::new().load(WORKED_EXAMPLE.as_bytes()).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.weight(&"B".to_string(), &"C".to_string()), Some(-2));
    }

    #[test]
    fn undeclared_endpoint_is_reported_with_line() {
        let err = GraphLoader::new().load("A\nA B 1\n".as_bytes()).unwrap_err();
        match err {
            LoadError::Graph { line, source } => {
                assert_eq!(line, 2);
                assert_eq!(source, GraphError::UnknownVertex { vertex: "B".to_string() });
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn implicit_vertices_are_declared_on_use() {
        let graph = GraphLoader::new()
            .implicit_vertices(true)
            .load("A B 1\nB C 2\n".as_bytes())
            .unwrap();
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn malformed_lines_are_rejected() {
        let bad_weight = GraphLoader::new().load("A\nB\nA B x\n".as_bytes()).unwrap_err();
        assert!(matches!(bad_weight, LoadError::Parse { line: 3, .. }));
        let bad_shape = GraphLoader::new().load("A B\n".as_bytes()).unwrap_err();
        assert!(matches!(bad_shape, LoadError::Parse { line: 1, .. }));
        assert_eq!(bad_shape.to_string(), "line 1: expected `vertex` or `source target weight`, found 2 tokens");
    }

    #[test]
    fn later_edge_overwrites_earlier() {
        let graph = GraphLoader::new().load("A\nB\nA B 1\nA B 7\n".as_bytes()).unwrap();
        assert_eq!(graph.weight(&"A".to_string(), &"B".to_string()), Some(7));
    }
}
