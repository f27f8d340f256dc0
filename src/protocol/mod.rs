//! Routing simulators.
//!
//! Both produce a one-hop snapshot per node straight from the topology; no
//! messages are exchanged and nothing is iterated to convergence.

pub mod distance_vector;
pub mod link_state;

pub use distance_vector::*;
pub use link_state::*;
