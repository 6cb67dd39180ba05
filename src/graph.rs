use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;

use fxhash::{FxHashMap, FxHashSet};

use crate::error::{Error, Result};
use crate::input::Adjacency;

pub type AdjacencyList = Vec<usize>;
pub type BTreeGraph = BTreeMap<usize, AdjacencyList>;

/// An undirected edge between two labels, stored with the smaller
/// label first so that `Edge::new(a, b) == Edge::new(b, a)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(String, String);

impl Edge {
    pub fn new(a: &str, b: &str) -> Edge {
        if a <= b {
            Edge(a.to_string(), b.to_string())
        } else {
            Edge(b.to_string(), a.to_string())
        }
    }

    pub fn endpoints(&self) -> (&str, &str) {
        (&self.0, &self.1)
    }
}

impl<'a> From<(&'a str, &'a str)> for Edge {
    fn from((a, b): (&'a str, &'a str)) -> Edge {
        Edge::new(a, b)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

/// An undirected adjacency list representation of a wiring diagram,
/// including the maps required to go between node labels and graph
/// node indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    pub graph: BTreeGraph,
    pub name_map: FxHashMap<String, usize>,
    pub inv_names: Vec<String>,
    /// Accepted edges as they were declared in the input, one per
    /// undirected connection.
    pub edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Builds the graph from every declared pair in the input,
    /// leaving out the edges in `excluded`.
    pub fn build(adj: &Adjacency, excluded: &BTreeSet<Edge>) -> Graph {
        Graph::build_inner(adj, excluded, false)
    }

    /// Builds the graph with every edge of the input, ignoring any
    /// exclusions. This is the graph the DOT dump draws.
    pub fn full(adj: &Adjacency) -> Graph {
        Graph::build_inner(adj, &BTreeSet::new(), true)
    }

    fn build_inner(
        adj: &Adjacency,
        excluded: &BTreeSet<Edge>,
        full: bool,
    ) -> Graph {
        let mut graph: BTreeGraph = BTreeMap::new();
        let mut name_map = FxHashMap::default();
        let mut inv_names = Vec::new();

        for label in adj.labels() {
            let ix = inv_names.len();
            name_map.insert(label.to_string(), ix);
            inv_names.push(label.to_string());
            graph.insert(ix, Vec::new());
        }

        let mut seen: FxHashSet<Edge> = FxHashSet::default();
        let mut edges = Vec::new();

        for (from, to) in adj.pairs() {
            let edge = Edge::new(from, to);

            if seen.contains(&edge) || (!full && excluded.contains(&edge)) {
                continue;
            }

            let from_ix = name_map[from];
            let to_ix = name_map[to];

            graph.entry(from_ix).or_default().push(to_ix);
            graph.entry(to_ix).or_default().push(from_ix);

            edges.push((from_ix, to_ix));
            seen.insert(edge);
        }

        log::debug!(
            "built graph with {} nodes and {} edges ({} excluded)",
            graph.len(),
            edges.len(),
            if full { 0 } else { excluded.len() }
        );

        Graph {
            graph,
            name_map,
            inv_names,
            edges,
        }
    }

    /// Constructs a graph holding exactly the given label pairs.
    pub fn from_edges<I, S>(edges: I) -> Graph
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let entries = edges
            .into_iter()
            .map(|(a, b)| {
                (a.as_ref().to_string(), vec![b.as_ref().to_string()])
            })
            .collect();

        Graph::full(&Adjacency { entries })
    }

    pub fn node_count(&self) -> usize {
        self.graph.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn index_of(&self, label: &str) -> Result<usize> {
        self.name_map
            .get(label)
            .copied()
            .ok_or_else(|| Error::UnknownNode(label.to_string()))
    }

    pub fn name(&self, ix: usize) -> &str {
        &self.inv_names[ix]
    }

    pub fn neighbors(&self, ix: usize) -> &[usize] {
        self.graph.get(&ix).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Adjacency {
        "a: b c\nb: c a\n".parse().unwrap()
    }

    #[test]
    fn edge_is_symmetric() {
        assert_eq!(Edge::new("jqt", "nvd"), Edge::new("nvd", "jqt"));
        assert_eq!(Edge::new("b", "a").endpoints(), ("a", "b"));
        assert_eq!(Edge::from(("x", "w")).to_string(), "w-x");
    }

    #[test]
    fn duplicate_declarations_are_added_once() {
        let graph = Graph::full(&triangle());

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);

        let a = graph.index_of("a").unwrap();
        assert_eq!(graph.neighbors(a).len(), 2);
    }

    #[test]
    fn excluded_edges_are_skipped_in_either_direction() {
        let excluded: BTreeSet<_> = vec![Edge::new("c", "b")].into_iter().collect();
        let graph = Graph::build(&triangle(), &excluded);

        assert_eq!(graph.edge_count(), 2);

        let b = graph.index_of("b").unwrap();
        let c = graph.index_of("c").unwrap();
        assert!(!graph.neighbors(b).contains(&c));
        assert!(!graph.neighbors(c).contains(&b));

        let full = Graph::full(&triangle());
        assert_eq!(full.edge_count(), 3);
    }

    #[test]
    fn isolated_nodes_are_kept() {
        let adj: Adjacency = "a: b\n".parse().unwrap();
        let excluded: BTreeSet<_> = vec![Edge::new("a", "b")].into_iter().collect();
        let graph = Graph::build(&adj, &excluded);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.neighbors(graph.index_of("a").unwrap()).is_empty());
    }

    #[test]
    fn building_is_deterministic() {
        let excluded: BTreeSet<_> = vec![Edge::new("a", "b")].into_iter().collect();

        assert_eq!(
            Graph::build(&triangle(), &excluded),
            Graph::build(&triangle(), &excluded)
        );
    }

    #[test]
    fn unknown_label() {
        let graph = Graph::full(&triangle());
        assert!(matches!(graph.index_of("zzz"), Err(Error::UnknownNode(_))));
    }
}
