use clap::{Parser, ValueEnum};
use anyhow::{Context, Result};
use log::info;

use routing_sim::algorithms::Algorithm;
use routing_sim::config::DemoConfig;
use routing_sim::simulate;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgorithmChoice {
    Dijkstra,
    BellmanFord,
    All,
}

impl AlgorithmChoice {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmChoice::Dijkstra => vec![Algorithm::Dijkstra],
            AlgorithmChoice::BellmanFord => vec![Algorithm::BellmanFord],
            AlgorithmChoice::All => Algorithm::ALL.to_vec(),
        }
    }
}

#[derive(Parser)]
#[command(name = "routing-sim", about = "Shortest paths and routing table simulation")]
struct Cli {
    /// JSON topology file; the built-in five-edge sample is used when absent
    #[arg(long)]
    config: Option<String>,

    /// Source node, overrides the one in the config
    #[arg(long)]
    source: Option<String>,

    #[arg(long, value_enum, default_value_t = AlgorithmChoice::All)]
    algorithm: AlgorithmChoice,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    let source = cli.source.unwrap_or_else(|| config.source.clone());

    let topology = config.topology();
    info!("Topology built: {} nodes, {} edges", topology.node_count(), topology.edge_count());

    let report = simulate(&topology, &source, &cli.algorithm.algorithms())
        .with_context(|| format!("simulation from source {} failed", source))?;

    if cli.json {
        println!("{}", report.to_json_pretty()?);
    } else {
        print!("{}", report);
    }

    Ok(())
}
