use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::input::Adjacency;
use crate::state::State;

/// Breadth-first walk from `start`, returning every node reachable
/// from it in visit order. Nodes are filtered against the visited
/// set when dequeued, so a node may sit in the queue more than once
/// but is only visited once.
pub fn reachable(graph: &Graph, start: usize) -> Vec<usize> {
    let mut state = State::initialize(&graph.graph);
    state.push(start);

    while let Some(node) = state.next_unvisited() {
        graph
            .neighbors(node)
            .iter()
            .for_each(|&next| state.push(next));
    }

    state.into_visited()
}

/// Size of the connected component containing the node `label`.
pub fn count_reachable(graph: &Graph, label: &str) -> Result<usize> {
    let start = graph.index_of(label)?;
    Ok(reachable(graph, start).len())
}

/// Sizes of the components on either side of `split`, counted from
/// each of its endpoints.
pub fn split_sizes(graph: &Graph, split: &Edge) -> Result<(usize, usize)> {
    let (a, b) = split.endpoints();
    Ok((count_reachable(graph, a)?, count_reachable(graph, b)?))
}

/// Removes `excluded` from the wiring diagram and multiplies the
/// sizes of the components on either side of one of the removed
/// edges.
///
/// The excluded edges are expected to cut the graph into exactly two
/// components. This is not checked beyond logging a warning when the
/// two sizes don't add up to the whole graph.
pub fn solve(adj: &Adjacency, excluded: &BTreeSet<Edge>) -> Result<usize> {
    let graph = Graph::build(adj, excluded);

    for edge in excluded.iter() {
        let (a, b) = edge.endpoints();
        graph.index_of(a)?;
        graph.index_of(b)?;
    }

    let split = excluded.iter().next().ok_or(Error::NoExcludedEdges)?;
    let (left, right) = split_sizes(&graph, split)?;

    log::info!("split at {}: components of {} and {}", split, left, right);

    if left + right != graph.node_count() {
        log::warn!(
            "components of {} and {} do not cover all {} nodes",
            left,
            right,
            graph.node_count()
        );
    }

    Ok(left * right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_fully_reachable() {
        let graph = Graph::from_edges(vec![("a", "b"), ("b", "c"), ("c", "d")]);

        for label in ["a", "b", "c", "d"].iter() {
            assert_eq!(count_reachable(&graph, label).unwrap(), 4);
        }
    }

    #[test]
    fn visit_order_is_breadth_first() {
        let graph =
            Graph::from_edges(vec![("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]);
        let start = graph.index_of("a").unwrap();

        let names: Vec<_> = reachable(&graph, start)
            .into_iter()
            .map(|ix| graph.name(ix))
            .collect();

        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn cycle_terminates() {
        let graph = Graph::from_edges(vec![("a", "b"), ("b", "c"), ("c", "a")]);
        assert_eq!(count_reachable(&graph, "c").unwrap(), 3);
    }

    #[test]
    fn solve_two_halves() {
        let adj: Adjacency = "a: b c\nb: c\nc: d\nd: e f\ne: f\n".parse().unwrap();
        let excluded: BTreeSet<_> = vec![Edge::new("d", "c")].into_iter().collect();

        assert_eq!(solve(&adj, &excluded).unwrap(), 9);
    }

    #[test]
    fn unknown_excluded_endpoint() {
        let adj: Adjacency = "a: b\n".parse().unwrap();
        let excluded: BTreeSet<_> =
            vec![Edge::new("a", "b"), Edge::new("a", "nope")].into_iter().collect();

        assert!(matches!(solve(&adj, &excluded), Err(Error::UnknownNode(_))));
    }

    #[test]
    fn nothing_excluded() {
        let adj: Adjacency = "a: b\n".parse().unwrap();
        assert!(matches!(
            solve(&adj, &BTreeSet::new()),
            Err(Error::NoExcludedEdges)
        ));
    }
}
