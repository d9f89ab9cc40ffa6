//! Directed weighted graph stored as nested hash maps.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use itertools::Itertools;

/// Edge weight.
pub type Cost = u64;

/// Directed graph mapping each vertex to its outgoing edges and their costs.
///
/// `add_edge` registers the source vertex on demand but never the target:
/// a target only appears inside its source's edge map until it is added with
/// `add_vertex`.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    adjacency: HashMap<V, HashMap<V, Cost>>,
    empty: HashMap<V, Cost>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            empty: HashMap::new(),
        }
    }
}

impl<V: Eq + Hash> Graph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vertex without edges. No-op if already present.
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Set the cost of `from -> to`, replacing any previous cost.
    pub fn add_edge(&mut self, from: V, to: V, cost: Cost) {
        self.adjacency.entry(from).or_default().insert(to, cost);
    }

    /// Cost of `from -> to`, `None` when there is no such edge.
    pub fn cost<Q>(&self, from: &Q, to: &Q) -> Option<Cost>
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Outgoing edges of `vertex`; empty when the vertex is unknown.
    pub fn neighbors<Q>(&self, vertex: &Q) -> &HashMap<V, Cost>
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.adjacency.get(vertex).unwrap_or(&self.empty)
    }

    pub fn vertices(&self) -> &HashMap<V, HashMap<V, Cost>> {
        &self.adjacency
    }

    pub fn contains_vertex<Q>(&self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.adjacency.contains_key(vertex)
    }

    /// Resolve a lookup key to the stored vertex.
    pub fn vertex<Q>(&self, vertex: &Q) -> Option<&V>
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.adjacency.get_key_value(vertex).map(|(v, _)| v)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashMap::len).sum()
    }

    pub fn clear(&mut self) {
        self.adjacency.clear();
    }
}

impl<V: Eq + Hash + fmt::Display> Graph<V> {
    /// One line per vertex: `Vertex -> { Dest (Cost: X), ... }`, sorted.
    pub fn render(&self) -> String {
        let lines = self
            .adjacency
            .iter()
            .map(|(from, edges)| {
                let targets = edges
                    .iter()
                    .map(|(to, cost)| format!("{} (Cost: {})", to, cost))
                    .sorted()
                    .join(", ");
                if targets.is_empty() {
                    format!("{} -> {{ }}", from)
                } else {
                    format!("{} -> {{ {} }}", from, targets)
                }
            })
            .sorted();

        std::iter::once("Graph Representation:".to_string())
            .chain(lines)
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_vertex_without_edges_when_rendering_then_shows_empty_braces() {
        let mut graph = Graph::new();
        graph.add_vertex("A");

        assert_eq!(graph.render(), "Graph Representation:\nA -> { }");
    }

    #[test]
    fn given_edges_when_rendering_then_lines_are_sorted() {
        let mut graph = Graph::new();
        graph.add_edge("B", "C", 3);
        graph.add_edge("A", "C", 2);
        graph.add_edge("A", "B", 1);

        assert_eq!(
            graph.render(),
            "Graph Representation:\nA -> { B (Cost: 1), C (Cost: 2) }\nB -> { C (Cost: 3) }"
        );
    }
}
