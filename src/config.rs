use serde::{Deserialize, Serialize};
use std::fs;
use anyhow::{Context, Result};
use crate::network::Topology;
use crate::{NodeId, Weight};

/// Topology and source node for the demo driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    pub source: NodeId,
    pub edges: Vec<EdgeConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
    #[serde(default)]
    pub bidirectional: bool,
}

impl EdgeConfig {
    fn new(from: &str, to: &str, weight: Weight) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            weight,
            bidirectional: false,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            source: "A".to_string(),
            edges: vec![
                EdgeConfig::new("A", "B", 1.0),
                EdgeConfig::new("A", "C", 4.0),
                EdgeConfig::new("B", "C", 2.0),
                EdgeConfig::new("B", "D", 6.0),
                EdgeConfig::new("C", "D", 3.0),
            ],
        }
    }
}

impl DemoConfig {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading topology config {}", path))?;
        let config: DemoConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing topology config {}", path))?;
        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn topology(&self) -> Topology {
        let mut topology = Topology::new();
        for edge in &self.edges {
            if edge.bidirectional {
                topology.add_link(edge.from.as_str(), edge.to.as_str(), edge.weight);
            } else {
                topology.add_edge(edge.from.as_str(), edge.to.as_str(), edge.weight);
            }
        }
        topology
    }
}
