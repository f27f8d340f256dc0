use log::debug;
use crate::network::Topology;
use crate::{NodeId, Result, Weight};

#[derive(Debug, Clone, PartialEq)]
pub struct LinkData {
    pub link_id: NodeId,
    pub metric: Weight,
}

/// Local link state a router would flood: its outgoing links in insertion
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkStateAdvertisement {
    pub advertising_router: NodeId,
    pub links: Vec<LinkData>,
}

impl LinkStateAdvertisement {
    pub fn iter(&self) -> impl Iterator<Item = (&str, Weight)> + '_ {
        self.links
            .iter()
            .map(|link| (link.link_id.as_str(), link.metric))
    }
}

pub fn link_state_advertisement(topology: &Topology, node: &str) -> Result<LinkStateAdvertisement> {
    Ok(advertisement_at(topology, topology.require(node)?))
}

/// One advertisement per node, in topology node order.
pub fn link_state_advertisements(topology: &Topology) -> Vec<LinkStateAdvertisement> {
    let lsas: Vec<LinkStateAdvertisement> = (0..topology.node_count())
        .map(|origin| advertisement_at(topology, origin))
        .collect();
    debug!("Built {} link-state advertisements ({} links)",
           lsas.len(),
           lsas.iter().map(|lsa| lsa.links.len()).sum::<usize>());
    lsas
}

fn advertisement_at(topology: &Topology, origin: usize) -> LinkStateAdvertisement {
    let links = topology
        .successors(origin)
        .iter()
        .map(|&(neighbor, weight)| LinkData {
            link_id: topology.node(neighbor).to_string(),
            metric: weight,
        })
        .collect();

    LinkStateAdvertisement {
        advertising_router: topology.node(origin).to_string(),
        links,
    }
}
