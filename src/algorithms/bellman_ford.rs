use log::{debug, info, warn};
use crate::algorithms::{Algorithm, ShortestPaths};
use crate::network::Topology;
use crate::{Result, RoutingError, Weight};

/// Bellman-Ford over the topology's edge list.
///
/// Runs at most `|nodes| - 1` relaxation passes, then one more: an edge that
/// still relaxes means a negative cycle is reachable from the source.
pub fn calculate_shortest_paths(topology: &Topology, source: &str) -> Result<ShortestPaths> {
    let source_index = topology.require(source)?;
    let node_count = topology.node_count();
    let edges = topology.edge_indices();

    let mut distances = vec![Weight::INFINITY; node_count];
    let mut previous = vec![None; node_count];
    distances[source_index] = 0.0;

    let max_passes = node_count.saturating_sub(1);
    let mut passes = 0;
    while passes < max_passes {
        passes += 1;
        let mut relaxed = 0usize;

        for &(u, v, weight) in edges {
            if !distances[u].is_finite() {
                continue;
            }
            let new_cost = distances[u] + weight;
            if new_cost < distances[v] {
                distances[v] = new_cost;
                previous[v] = Some((u, weight));
                relaxed += 1;
            }
        }

        debug!("Bellman-Ford pass {}/{}: {} relaxations", passes, max_passes, relaxed);
        if relaxed == 0 {
            break;
        }
    }

    for &(u, v, weight) in edges {
        if distances[u].is_finite() && distances[u] + weight < distances[v] {
            let (from, to) = (topology.node(u), topology.node(v));
            warn!("Negative cycle detected from {}: edge {} -> {} still relaxes", source, from, to);
            return Err(RoutingError::NegativeCycle {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
    }

    let paths = ShortestPaths::new(Algorithm::BellmanFord, topology, source_index, distances, previous);
    info!("Bellman-Ford from {} converged after {} passes", source, passes);

    Ok(paths)
}
