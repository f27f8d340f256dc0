pub mod bellman_ford;
pub mod dijkstra;

use std::collections::HashMap;
use std::fmt;
use serde::{Deserialize, Serialize};
use crate::network::Topology;
use crate::{NodeId, Result, RoutingError, Weight};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Dijkstra,
    BellmanFord,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Dijkstra, Algorithm::BellmanFord];

    pub fn run(self, topology: &Topology, source: &str) -> Result<ShortestPaths> {
        match self {
            Algorithm::Dijkstra => dijkstra::calculate_shortest_paths(topology, source),
            Algorithm::BellmanFord => bellman_ford::calculate_shortest_paths(topology, source),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => write!(f, "Dijkstra"),
            Algorithm::BellmanFord => write!(f, "Bellman-Ford"),
        }
    }
}

/// Single-source result of a shortest-path run.
///
/// Owns a copy of the node identifiers so it stays valid after the topology
/// it was computed from is modified or dropped. Unreachable nodes carry
/// `Weight::INFINITY` and no predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    algorithm: Algorithm,
    source: usize,
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    distances: Vec<Weight>,
    /// Predecessor and the weight of the edge taken from it, as seen by the run.
    previous: Vec<Option<(usize, Weight)>>,
}

impl ShortestPaths {
    pub(crate) fn new(
        algorithm: Algorithm,
        topology: &Topology,
        source: usize,
        distances: Vec<Weight>,
        previous: Vec<Option<(usize, Weight)>>,
    ) -> Self {
        let nodes: Vec<NodeId> = topology.nodes().map(str::to_string).collect();
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.clone(), i))
            .collect();

        Self {
            algorithm,
            source,
            nodes,
            index,
            distances,
            previous,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn source(&self) -> &str {
        &self.nodes[self.source]
    }

    pub fn distance(&self, node: &str) -> Result<Weight> {
        Ok(self.distances[self.require(node)?])
    }

    pub fn is_reachable(&self, node: &str) -> Result<bool> {
        Ok(self.distance(node)?.is_finite())
    }

    /// `(node, distance)` pairs in topology node order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Weight)> + '_ {
        self.nodes
            .iter()
            .map(String::as_str)
            .zip(self.distances.iter().copied())
    }

    pub fn to_map(&self) -> HashMap<NodeId, Weight> {
        self.iter()
            .map(|(node, distance)| (node.to_string(), distance))
            .collect()
    }

    pub fn previous(&self, node: &str) -> Result<Option<&str>> {
        Ok(self.previous_at(self.require(node)?))
    }

    /// Node sequence from the source to `target`, both ends included.
    pub fn path_to(&self, target: &str) -> Result<Option<Vec<NodeId>>> {
        Ok(self.path_at(self.require(target)?))
    }

    /// First hop after the source on the way to `target`.
    pub fn next_hop(&self, target: &str) -> Result<Option<NodeId>> {
        Ok(self
            .path_to(target)?
            .and_then(|path| path.into_iter().nth(1)))
    }

    /// Edges of the shortest-path tree as `(previous, node, weight)`, with the
    /// weight the run relaxed through.
    pub fn tree_edges(&self) -> Vec<(NodeId, NodeId, Weight)> {
        self.previous
            .iter()
            .enumerate()
            .filter_map(|(node, prev)| {
                prev.map(|(p, weight)| (self.nodes[p].clone(), self.nodes[node].clone(), weight))
            })
            .collect()
    }

    pub(crate) fn previous_at(&self, node: usize) -> Option<&str> {
        self.previous[node].map(|(p, _)| self.nodes[p].as_str())
    }

    pub(crate) fn path_at(&self, target: usize) -> Option<Vec<NodeId>> {
        if !self.distances[target].is_finite() {
            return None;
        }

        let mut path = vec![self.nodes[target].clone()];
        let mut current = target;
        while current != self.source {
            match self.previous[current] {
                // A predecessor chain longer than the node count would mean a cycle.
                Some((prev, _)) if path.len() <= self.nodes.len() => {
                    path.push(self.nodes[prev].clone());
                    current = prev;
                }
                _ => return None,
            }
        }

        path.reverse();
        Some(path)
    }

    fn require(&self, node: &str) -> Result<usize> {
        self.index
            .get(node)
            .copied()
            .ok_or_else(|| RoutingError::UnknownNode(node.to_string()))
    }
}
