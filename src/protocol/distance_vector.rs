use log::debug;
use crate::network::Topology;
use crate::{NodeId, Result, Weight};

#[derive(Debug, Clone, PartialEq)]
pub struct VectorEntry {
    pub destination: NodeId,
    pub metric: Weight,
}

/// The table a node would hand to its direct neighbours: 0 for itself, the
/// link weight for each neighbour and `Weight::INFINITY` for everything else.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceVector {
    pub node: NodeId,
    pub entries: Vec<VectorEntry>,
}

impl DistanceVector {
    pub fn metric(&self, destination: &str) -> Option<Weight> {
        self.entries
            .iter()
            .find(|entry| entry.destination == destination)
            .map(|entry| entry.metric)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Weight)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.destination.as_str(), entry.metric))
    }

    /// Destinations other than the node itself with a finite metric.
    pub fn reachable(&self) -> impl Iterator<Item = (&str, Weight)> + '_ {
        self.iter()
            .filter(move |&(destination, metric)| destination != self.node && metric.is_finite())
    }
}

pub fn distance_vector(topology: &Topology, node: &str) -> Result<DistanceVector> {
    Ok(vector_at(topology, topology.require(node)?))
}

/// One vector per node, in topology node order.
pub fn distance_vectors(topology: &Topology) -> Vec<DistanceVector> {
    let vectors: Vec<DistanceVector> = (0..topology.node_count())
        .map(|origin| vector_at(topology, origin))
        .collect();
    debug!("Built {} distance vectors", vectors.len());
    vectors
}

fn vector_at(topology: &Topology, origin: usize) -> DistanceVector {
    let mut metrics = vec![Weight::INFINITY; topology.node_count()];
    for &(neighbor, weight) in topology.successors(origin) {
        metrics[neighbor] = weight;
    }
    // A self-loop never overrides the zero self-distance.
    metrics[origin] = 0.0;

    let entries = topology
        .nodes()
        .zip(metrics)
        .map(|(destination, metric)| VectorEntry {
            destination: destination.to_string(),
            metric,
        })
        .collect();

    DistanceVector {
        node: topology.node(origin).to_string(),
        entries,
    }
}
