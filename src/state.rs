use std::collections::VecDeque;

use crate::graph::BTreeGraph;

/// Bookkeeping for a single breadth-first walk: the worklist of
/// nodes still to visit and the nodes already visited.
#[derive(Default, Debug, Clone)]
pub struct State {
    pub visited: Vec<bool>,
    pub queue: VecDeque<usize>,
    pub order: Vec<usize>,
}

impl State {
    pub fn initialize(graph: &BTreeGraph) -> State {
        let num_nodes = graph.len();

        State {
            visited: vec![false; num_nodes],
            queue: VecDeque::new(),
            order: Vec::with_capacity(num_nodes),
        }
    }

    pub fn push(&mut self, node: usize) {
        self.queue.push_back(node);
    }

    /// Pops nodes until one that has not been visited yet turns up,
    /// marks it visited and returns it.
    pub fn next_unvisited(&mut self) -> Option<usize> {
        while let Some(node) = self.queue.pop_front() {
            if !self.visited[node] {
                self.visited[node] = true;
                self.order.push(node);
                return Some(node);
            }
        }
        None
    }

    pub fn into_visited(self) -> Vec<usize> {
        self.order
    }
}
