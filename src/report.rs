//! Serialisable view of everything the engines computed, for a presentation
//! layer to render. Building a report never re-runs an algorithm.

use std::fmt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::algorithms::{Algorithm, ShortestPaths};
use crate::network::Topology;
use crate::protocol::{DistanceVector, LinkStateAdvertisement};
use crate::{NodeId, Weight};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingReport {
    pub generated_at: DateTime<Utc>,
    pub topology: TopologyView,
    pub shortest_paths: Vec<ShortestPathReport>,
    pub distance_vectors: Vec<DistanceVectorReport>,
    pub link_states: Vec<LinkStateReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyView {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<EdgeReport>,
}

/// A directed edge; `None` stands for a non-finite weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeReport {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Option<Weight>,
}

impl EdgeReport {
    fn new(from: &str, to: &str, weight: Weight) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            weight: finite(weight),
        }
    }
}

/// Metric towards a node; `None` stands for unreachable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricEntry {
    pub node: NodeId,
    pub metric: Option<Weight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteReport {
    pub destination: NodeId,
    pub distance: Option<Weight>,
    pub previous: Option<NodeId>,
    pub next_hop: Option<NodeId>,
    pub path: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathReport {
    pub algorithm: Algorithm,
    pub source: NodeId,
    pub routes: Vec<RouteReport>,
    /// Shortest-path tree edges, for emphasis rendering.
    pub highlighted_edges: Vec<EdgeReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceVectorReport {
    pub node: NodeId,
    pub entries: Vec<MetricEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkStateReport {
    pub advertising_router: NodeId,
    pub links: Vec<MetricEntry>,
}

fn finite(weight: Weight) -> Option<Weight> {
    weight.is_finite().then_some(weight)
}

pub struct ReportBuilder<'a> {
    topology: &'a Topology,
    shortest_paths: Vec<ShortestPathReport>,
    distance_vectors: Vec<DistanceVectorReport>,
    link_states: Vec<LinkStateReport>,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(topology: &'a Topology) -> Self {
        Self {
            topology,
            shortest_paths: Vec::new(),
            distance_vectors: Vec::new(),
            link_states: Vec::new(),
        }
    }

    pub fn shortest_paths(mut self, paths: &ShortestPaths) -> Self {
        let routes = paths
            .iter()
            .enumerate()
            .map(|(i, (node, distance))| {
                let path = paths.path_at(i).unwrap_or_default();
                RouteReport {
                    destination: node.to_string(),
                    distance: finite(distance),
                    previous: paths.previous_at(i).map(str::to_string),
                    next_hop: path.get(1).cloned(),
                    path,
                }
            })
            .collect();

        let highlighted_edges = paths
            .tree_edges()
            .into_iter()
            .map(|(from, to, weight)| EdgeReport::new(&from, &to, weight))
            .collect();

        self.shortest_paths.push(ShortestPathReport {
            algorithm: paths.algorithm(),
            source: paths.source().to_string(),
            routes,
            highlighted_edges,
        });
        self
    }

    pub fn distance_vectors(mut self, vectors: &[DistanceVector]) -> Self {
        self.distance_vectors.extend(vectors.iter().map(|vector| DistanceVectorReport {
            node: vector.node.clone(),
            entries: vector
                .iter()
                .map(|(node, metric)| MetricEntry {
                    node: node.to_string(),
                    metric: finite(metric),
                })
                .collect(),
        }));
        self
    }

    pub fn link_states(mut self, lsas: &[LinkStateAdvertisement]) -> Self {
        self.link_states.extend(lsas.iter().map(|lsa| LinkStateReport {
            advertising_router: lsa.advertising_router.clone(),
            links: lsa
                .iter()
                .map(|(node, metric)| MetricEntry {
                    node: node.to_string(),
                    metric: finite(metric),
                })
                .collect(),
        }));
        self
    }

    pub fn build(self) -> RoutingReport {
        RoutingReport {
            generated_at: Utc::now(),
            topology: TopologyView {
                nodes: self.topology.nodes().map(str::to_string).collect(),
                edges: self
                    .topology
                    .edges()
                    .map(|(from, to, weight)| EdgeReport::new(from, to, weight))
                    .collect(),
            },
            shortest_paths: self.shortest_paths,
            distance_vectors: self.distance_vectors,
            link_states: self.link_states,
        }
    }
}

impl RoutingReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }

    pub fn shortest_paths_for(&self, algorithm: Algorithm) -> Option<&ShortestPathReport> {
        self.shortest_paths.iter().find(|report| report.algorithm == algorithm)
    }
}

struct Metric(Option<Weight>);

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(weight) => write!(f, "{}", weight),
            None => write!(f, "inf"),
        }
    }
}

impl fmt::Display for RoutingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Network graph: {} nodes, {} edges",
                 self.topology.nodes.len(), self.topology.edges.len())?;
        for edge in &self.topology.edges {
            writeln!(f, "  {} -> {} ({})", edge.from, edge.to, Metric(edge.weight))?;
        }

        for run in &self.shortest_paths {
            writeln!(f)?;
            writeln!(f, "{} from source {}:", run.algorithm, run.source)?;
            for route in &run.routes {
                write!(f, "  {}: {}", route.destination, Metric(route.distance))?;
                if route.path.len() > 1 {
                    write!(f, " via {}", route.path.join(" -> "))?;
                }
                writeln!(f)?;
            }
            let highlighted: Vec<String> = run
                .highlighted_edges
                .iter()
                .map(|edge| format!("{}->{}", edge.from, edge.to))
                .collect();
            writeln!(f, "  highlighted: [{}]", highlighted.join(", "))?;
        }

        if !self.distance_vectors.is_empty() {
            writeln!(f)?;
            writeln!(f, "Distance vector routing:")?;
            for vector in &self.distance_vectors {
                let entries: Vec<String> = vector
                    .entries
                    .iter()
                    .map(|entry| format!("{}: {}", entry.node, Metric(entry.metric)))
                    .collect();
                writeln!(f, "  Node {}: {{{}}}", vector.node, entries.join(", "))?;
            }
        }

        if !self.link_states.is_empty() {
            writeln!(f)?;
            writeln!(f, "Link-state routing:")?;
            for lsa in &self.link_states {
                let links: Vec<String> = lsa
                    .links
                    .iter()
                    .map(|link| format!("({}, {})", link.node, Metric(link.metric)))
                    .collect();
                writeln!(f, "  Node {} sends link state: [{}]", lsa.advertising_router, links.join(", "))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{distance_vectors, link_state_advertisements};

    fn sample() -> Topology {
        [
            ("A", "B", 1.0),
            ("A", "C", 4.0),
            ("B", "C", 2.0),
            ("B", "D", 6.0),
            ("C", "D", 3.0),
        ]
        .into_iter()
        .collect()
    }

    fn full_report(topology: &Topology) -> RoutingReport {
        let dijkstra = Algorithm::Dijkstra.run(topology, "A").unwrap();
        ReportBuilder::new(topology)
            .shortest_paths(&dijkstra)
            .distance_vectors(&distance_vectors(topology))
            .link_states(&link_state_advertisements(topology))
            .build()
    }

    #[test]
    fn report_carries_topology_and_routes() {
        let topology = sample();
        let report = full_report(&topology);

        assert_eq!(report.topology.nodes, vec!["A", "B", "C", "D"]);
        assert_eq!(report.topology.edges.len(), 5);

        let run = report.shortest_paths_for(Algorithm::Dijkstra).unwrap();
        assert_eq!(run.source, "A");
        let d = run.routes.iter().find(|r| r.destination == "D").unwrap();
        assert_eq!(d.distance, Some(6.0));
        assert_eq!(d.previous.as_deref(), Some("C"));
        assert_eq!(d.next_hop.as_deref(), Some("B"));
        assert_eq!(d.path, vec!["A", "B", "C", "D"]);

        assert_eq!(run.highlighted_edges.len(), 3);
        assert!(run.highlighted_edges.contains(&EdgeReport::new("B", "C", 2.0)));
        assert!(report.shortest_paths_for(Algorithm::BellmanFord).is_none());
    }

    #[test]
    fn unreachable_metrics_become_none() {
        let topology = sample();
        let report = full_report(&topology);

        let a = &report.distance_vectors[0];
        assert_eq!(a.node, "A");
        assert_eq!(a.entries[3], MetricEntry { node: "D".into(), metric: None });
        assert_eq!(a.entries[0].metric, Some(0.0));
    }

    #[test]
    fn json_uses_null_for_unreachable_and_parses_back() {
        let mut topology = sample();
        topology.add_edge("E", "A", 1.0);
        let report = full_report(&topology);

        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["shortest_paths"][0]["algorithm"], "dijkstra");
        assert_eq!(value["shortest_paths"][0]["routes"][4]["destination"], "E");
        assert!(value["shortest_paths"][0]["routes"][4]["distance"].is_null());

        assert_eq!(RoutingReport::from_json(&json).unwrap(), report);
    }

    #[test]
    fn highlighted_weights_come_from_the_run_not_the_live_topology() {
        let mut topology: Topology = [("A", "B", 1.0), ("B", "C", 2.0)].into_iter().collect();
        let dijkstra = Algorithm::Dijkstra.run(&topology, "A").unwrap();

        topology.add_edge("B", "C", 100.0);
        let report = ReportBuilder::new(&topology).shortest_paths(&dijkstra).build();

        let run = &report.shortest_paths[0];
        let c = run.routes.iter().find(|r| r.destination == "C").unwrap();
        assert_eq!(c.distance, Some(3.0));

        let highlighted_sum: Weight = run
            .highlighted_edges
            .iter()
            .filter(|edge| c.path.contains(&edge.to))
            .filter_map(|edge| edge.weight)
            .sum();
        assert_eq!(Some(highlighted_sum), c.distance);
        assert!(run.highlighted_edges.contains(&EdgeReport::new("B", "C", 2.0)));
    }

    #[test]
    fn infinite_edge_weight_survives_json() {
        let topology: Topology = [("A", "B", Weight::INFINITY), ("B", "C", 1.0)].into_iter().collect();
        let report = ReportBuilder::new(&topology).build();

        let json = report.to_json().unwrap();
        let parsed = RoutingReport::from_json(&json).unwrap();
        assert_eq!(parsed.topology.edges[0], EdgeReport { from: "A".into(), to: "B".into(), weight: None });
        assert_eq!(parsed.topology.edges[1].weight, Some(1.0));
        assert!(report.to_string().contains("  A -> B (inf)"));
    }

    #[test]
    fn text_rendering_lists_every_section() {
        let text = full_report(&sample()).to_string();

        assert!(text.starts_with("Network graph: 4 nodes, 5 edges"));
        assert!(text.contains("Dijkstra from source A:"));
        assert!(text.contains("  D: 6 via A -> B -> C -> D"));
        assert!(text.contains("  Node A: {A: 0, B: 1, C: 4, D: inf}"));
        assert!(text.contains("  Node B sends link state: [(C, 2), (D, 6)]"));
    }
}
