//! Core state types for the mass-spring simulation
//!
//! Defines the particle system as parallel arrays:
//! - `positions` / `velocities` / `forces` using `NVec3`
//! - `edges` describing the spring-damper topology
//!
//! The system holds the arrays, the edge list, and the current simulation
//! time `t`. Particle count is fixed for the lifetime of one system; a
//! count change rebuilds the whole system atomically (see `Simulation::rebuild`)

use nalgebra::Vector3;

use crate::simulation::error::SimulationError;

pub type NVec3 = Vector3<f64>;

/// An unordered pair of particle indices connected by a spring-damper
///
/// Invariants (checked in [`ParticleSystem::new`]):
/// - `first != second`
/// - both indices `< N`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub first: usize,  // particle index of one endpoint
    pub second: usize, // particle index of the other endpoint
}

/// A hard positional pin applied after every integration step
///
/// Overwrites the pinned particle's position and velocity unconditionally,
/// so pinned particles are never displaced by physics within a step.
/// Pins on the same index apply in insertion order; last wins
#[derive(Debug, Clone, Copy)]
pub struct Constraint {
    pub point_index: usize,    // index of the pinned particle
    pub fixed_position: NVec3, // position enforced every step
    pub fixed_velocity: NVec3, // velocity enforced every step
}

/// Particle state stored as parallel arrays (index-addressed particles)
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    pub positions: Vec<NVec3>,  // x_i
    pub velocities: Vec<NVec3>, // v_i
    pub forces: Vec<NVec3>,     // accumulated f_i, fully overwritten each step
    pub edges: Vec<Edge>,       // spring-damper topology, immutable once built
    pub t: f64,                 // simulation time
}

impl ParticleSystem {
    /// Build a system of `count` particles at the origin with the given topology
    ///
    /// Edge indices are validated here so step-time code never has to:
    /// an out-of-range or self-loop edge is a fatal configuration error
    pub fn new(count: usize, edges: Vec<Edge>) -> Result<Self, SimulationError> {
        for e in &edges {
            if e.first == e.second {
                return Err(SimulationError::EdgeSelfLoop { index: e.first });
            }
            if e.first >= count || e.second >= count {
                return Err(SimulationError::EdgeOutOfRange {
                    first: e.first,
                    second: e.second,
                    count,
                });
            }
        }

        Ok(Self {
            positions: vec![NVec3::zeros(); count],
            velocities: vec![NVec3::zeros(); count],
            forces: vec![NVec3::zeros(); count],
            edges,
            t: 0.0,
        })
    }

    /// Number of particles
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
