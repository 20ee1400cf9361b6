//! Error taxonomy for simulation construction and stepping
//!
//! Every variant is a construction-boundary error: invalid parameters,
//! bad topology, or bad pin indices are rejected before a system exists,
//! never discovered mid-step. The only step-time guard is the `dt` check,
//! since a negative or non-finite step would silently corrupt the state

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    /// A physical parameter is outside its valid range (e.g. mass <= 0,
    /// restitution outside [0, 1], negative coefficient)
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Step called with a non-finite or non-positive time delta
    #[error("invalid time step: {0}")]
    InvalidTimeStep(f64),

    /// An edge references a particle index outside the system
    #[error("edge ({first}, {second}) out of range for {count} particles")]
    EdgeOutOfRange {
        first: usize,
        second: usize,
        count: usize,
    },

    /// An edge connects a particle to itself
    #[error("edge connects particle {index} to itself")]
    EdgeSelfLoop { index: usize },

    /// A constraint pins a particle index outside the system
    #[error("constraint index {index} out of range for {count} particles")]
    ConstraintOutOfRange { index: usize, count: usize },

    /// A chain needs at least one particle
    #[error("chain must contain at least one particle")]
    EmptyChain,
}
