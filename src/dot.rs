use std::io::{self, Write};

use crate::graph::Graph;

/// Writes the graph in Graphviz DOT format, one statement per edge,
/// drawn without arrowheads so the rendering reads as undirected.
///
/// ```text
/// wire-split --graph | dot -Tsvg -o out.svg
/// ```
pub fn write_dot<W: Write>(graph: &Graph, out: &mut W) -> io::Result<()> {
    writeln!(out, "digraph G {{")?;
    writeln!(out, "  edge [dir=none, color=red];")?;

    for &(from, to) in graph.edges.iter() {
        let from = graph.name(from);
        let to = graph.name(to);
        writeln!(out, "  \"{}\" -> \"{}\" [label=\"{}:{}\"];", from, to, from, to)?;
    }

    writeln!(out, "}}")
}

pub fn to_dot_string(graph: &Graph) -> String {
    let mut buf = Vec::new();
    // writing into a Vec cannot fail
    let _ = write_dot(graph, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
