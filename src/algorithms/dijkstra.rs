use std::collections::BinaryHeap;
use std::cmp::Ordering;
use log::{debug, info, warn};
use crate::algorithms::{Algorithm, ShortestPaths};
use crate::network::Topology;
use crate::{Result, RoutingError, Weight};

#[derive(Debug)]
struct State {
    cost: Weight,
    seq: u64,
    node: usize,
}

impl Eq for State {}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap, earlier pushes win ties
        other.cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra with lazy deletion: stale queue entries are skipped on pop
/// instead of being decreased in place.
///
/// Every edge weight must be non-negative; the whole edge set is checked
/// before the search starts.
pub fn calculate_shortest_paths(topology: &Topology, source: &str) -> Result<ShortestPaths> {
    let source_index = topology.require(source)?;

    if let Some((from, to, weight)) = topology.first_negative_edge() {
        warn!("Refusing to run Dijkstra: edge {} -> {} has weight {}", from, to, weight);
        return Err(RoutingError::NegativeWeight {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        });
    }

    let node_count = topology.node_count();
    let mut distances = vec![Weight::INFINITY; node_count];
    let mut previous = vec![None; node_count];
    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;

    distances[source_index] = 0.0;
    heap.push(State {
        cost: 0.0,
        seq,
        node: source_index,
    });

    let mut stale = 0usize;
    while let Some(State { cost, node, .. }) = heap.pop() {
        // Skip if we've already found a better path
        if cost > distances[node] {
            stale += 1;
            continue;
        }

        for &(neighbor, weight) in topology.successors(node) {
            let new_cost = cost + weight;

            if new_cost < distances[neighbor] {
                distances[neighbor] = new_cost;
                previous[neighbor] = Some((node, weight));

                seq += 1;
                heap.push(State {
                    cost: new_cost,
                    seq,
                    node: neighbor,
                });
            }
        }
    }

    debug!("Dijkstra from {}: {} pushes, {} stale entries skipped", source, seq + 1, stale);

    let paths = ShortestPaths::new(Algorithm::Dijkstra, topology, source_index, distances, previous);
    info!("Dijkstra from {} reached {} of {} nodes",
          source,
          paths.iter().filter(|(_, d)| d.is_finite()).count(),
          node_count);

    Ok(paths)
}
