use std::collections::HashMap;
use log::debug;
use crate::{NodeId, Result, RoutingError, Weight};

/// Directed weighted graph.
///
/// Nodes are kept in insertion order and addressed internally by index.
/// Each ordered pair carries at most one edge: adding it again replaces the
/// weight and moves the edge to the most recent insertion position.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    adjacency: Vec<Vec<(usize, Weight)>>,
    edge_order: Vec<(usize, usize, Weight)>,
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_edge(&mut self, from: impl Into<NodeId>, to: impl Into<NodeId>, weight: Weight) {
        let u = self.insert_node(from.into());
        let v = self.insert_node(to.into());

        let outgoing = &mut self.adjacency[u];
        if let Some(pos) = outgoing.iter().position(|&(target, _)| target == v) {
            let (_, old) = outgoing.remove(pos);
            debug!("Overwriting edge {} -> {} (old weight: {}, new weight: {})",
                   self.nodes[u], self.nodes[v], old, weight);

            if let Some(pos) = self.edge_order.iter().position(|&(s, t, _)| s == u && t == v) {
                self.edge_order.remove(pos);
            }
        }

        self.adjacency[u].push((v, weight));
        self.edge_order.push((u, v, weight));
    }

    /// Adds the edge in both directions with the same weight.
    pub fn add_link(&mut self, a: impl Into<NodeId>, b: impl Into<NodeId>, weight: Weight) {
        let a = a.into();
        let b = b.into();
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
    }

    pub fn neighbors(&self, node: &str) -> Result<impl Iterator<Item = (&str, Weight)> + '_> {
        let u = self.require(node)?;
        Ok(self.adjacency[u]
            .iter()
            .map(|&(v, weight)| (self.nodes[v].as_str(), weight)))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(String::as_str)
    }

    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, Weight)> + '_ {
        self.edge_order
            .iter()
            .map(|&(u, v, weight)| (self.nodes[u].as_str(), self.nodes[v].as_str(), weight))
    }

    pub fn weight(&self, from: &str, to: &str) -> Option<Weight> {
        let u = *self.index.get(from)?;
        let v = *self.index.get(to)?;
        self.adjacency[u]
            .iter()
            .find(|&&(target, _)| target == v)
            .map(|&(_, weight)| weight)
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.index.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First edge, in insertion order, whose weight is negative or NaN.
    pub fn first_negative_edge(&self) -> Option<(&str, &str, Weight)> {
        self.edges().find(|&(_, _, weight)| weight < 0.0 || weight.is_nan())
    }

    pub fn has_negative_weight(&self) -> bool {
        self.first_negative_edge().is_some()
    }

    pub(crate) fn index_of(&self, node: &str) -> Option<usize> {
        self.index.get(node).copied()
    }

    pub(crate) fn require(&self, node: &str) -> Result<usize> {
        self.index_of(node)
            .ok_or_else(|| RoutingError::UnknownNode(node.to_string()))
    }

    pub(crate) fn node(&self, index: usize) -> &str {
        &self.nodes[index]
    }

    pub(crate) fn successors(&self, index: usize) -> &[(usize, Weight)] {
        &self.adjacency[index]
    }

    pub(crate) fn edge_indices(&self) -> &[(usize, usize, Weight)] {
        &self.edge_order
    }

    fn insert_node(&mut self, node: NodeId) -> usize {
        if let Some(&index) = self.index.get(&node) {
            return index;
        }

        let index = self.nodes.len();
        self.index.insert(node.clone(), index);
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        index
    }
}

impl<N: Into<NodeId>> FromIterator<(N, N, Weight)> for Topology {
    fn from_iter<I: IntoIterator<Item = (N, N, Weight)>>(iter: I) -> Self {
        let mut topology = Topology::new();
        topology.extend(iter);
        topology
    }
}

impl<N: Into<NodeId>> Extend<(N, N, Weight)> for Topology {
    fn extend<I: IntoIterator<Item = (N, N, Weight)>>(&mut self, iter: I) {
        for (from, to, weight) in iter {
            self.add_edge(from, to, weight);
        }
    }
}
