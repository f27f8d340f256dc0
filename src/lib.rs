pub mod algorithms;
pub mod config;
pub mod error;
pub mod network;
pub mod protocol;
pub mod report;

pub use error::{Result, RoutingError};

use algorithms::Algorithm;
use network::Topology;
use report::{ReportBuilder, RoutingReport};

pub type NodeId = String;
pub type Weight = f64;

/// Runs the requested shortest-path algorithms from `source` plus both
/// routing simulators, and packages everything into one report.
///
/// Any error aborts the whole run; no partial report is returned.
pub fn simulate(topology: &Topology, source: &str, algorithms: &[Algorithm]) -> Result<RoutingReport> {
    topology.require(source)?;

    let mut builder = ReportBuilder::new(topology);
    for &algorithm in algorithms {
        let paths = algorithm.run(topology, source)?;
        builder = builder.shortest_paths(&paths);
    }

    Ok(builder
        .distance_vectors(&protocol::distance_vectors(topology))
        .link_states(&protocol::link_state_advertisements(topology))
        .build())
}
