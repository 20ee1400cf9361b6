//! Force contributors for the mass-spring system
//!
//! Defines the [`Force`] trait plus the three reference terms: uniform
//! gravity, air drag against an optional wind field, and the per-edge
//! spring-damper. Each term implements [`Force`] and their contributions are
//! summed into a single force vector per particle

use std::sync::Arc;

use crate::simulation::fields::VectorField;
use crate::simulation::states::{Edge, NVec3, ParticleSystem};

/// Collection of force terms (gravity, drag, springs, etc.)
/// Each term implements [`Force`] and their contributions are summed
/// into `forces[i]` for each particle
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Accumulate total forces for all particles into `sys.forces`
    ///
    /// The buffer is fully overwritten, never accumulated across calls,
    /// so no stale impulse from a previous step can leak in
    pub fn accumulate_forces(&self, sys: &mut ParticleSystem) {
        let ParticleSystem {
            positions,
            velocities,
            forces,
            edges,
            ..
        } = sys;

        // Zero buffer
        for f in forces.iter_mut() {
            *f = NVec3::zeros();
        }
        // Iterate over all force contributors
        for term in &self.terms {
            term.force(positions, velocities, edges, forces);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for force sources operating on particle state
/// Implementations add their contribution into `out[i]` for each particle
pub trait Force {
    fn force(
        &self,
        positions: &[NVec3],
        velocities: &[NVec3],
        edges: &[Edge],
        out: &mut [NVec3],
    );
}

/// Uniform gravity, proportional to the (uniform) particle mass
pub struct Gravity {
    pub gravity: NVec3, // gravitational acceleration
    pub mass: f64,      // uniform particle mass
}

impl Force for Gravity {
    fn force(
        &self,
        positions: &[NVec3],
        _velocities: &[NVec3],
        _edges: &[Edge],
        out: &mut [NVec3],
    ) {
        let g = self.gravity * self.mass;
        for i in 0..positions.len() {
            out[i] += g;
        }
    }
}

/// Air drag against an optional ambient wind field
///
/// The drag force opposes the particle velocity relative to the sampled
/// flow: `f = -k * (v - wind(x))`. Without a field the relative velocity is
/// the particle's own velocity (pure air resistance)
pub struct AirDrag {
    pub drag_coefficient: f64,
    pub wind: Option<Arc<dyn VectorField + Send + Sync>>,
}

impl Force for AirDrag {
    fn force(
        &self,
        positions: &[NVec3],
        velocities: &[NVec3],
        _edges: &[Edge],
        out: &mut [NVec3],
    ) {
        for i in 0..positions.len() {
            let mut relative_vel = velocities[i];
            if let Some(wind) = &self.wind {
                relative_vel -= wind.sample(&positions[i]);
            }
            out[i] += -self.drag_coefficient * relative_vel;
        }
    }
}

/// Per-edge Hookean spring plus velocity-proportional damping
///
/// Both contributions are applied as equal-and-opposite pairs to the edge
/// endpoints (Newton's third law), so every edge is momentum-neutral
pub struct SpringDamper {
    pub stiffness: f64,           // Hookean spring constant
    pub rest_length: f64,         // zero-force separation
    pub damping_coefficient: f64, // relative-velocity damping
}

impl Force for SpringDamper {
    fn force(
        &self,
        positions: &[NVec3],
        velocities: &[NVec3],
        edges: &[Edge],
        out: &mut [NVec3],
    ) {
        for edge in edges {
            let (pid0, pid1) = (edge.first, edge.second);

            // Spring force.
            // r points from the second endpoint toward the first; the spring
            // pulls the pair back toward rest_length separation along r.
            let r = positions[pid0] - positions[pid1];
            let distance = r.norm();
            if distance > 0.0 {
                // Coincident endpoints have no defined direction; skip the
                // spring term for this edge this step rather than emit NaN
                let force = -self.stiffness * (distance - self.rest_length) * (r / distance);
                out[pid0] += force;
                out[pid1] -= force;
            }

            // Damping force, opposing the relative velocity of the pair
            let relative_v = velocities[pid0] - velocities[pid1];
            let damping = -self.damping_coefficient * relative_v;
            out[pid0] += damping;
            out[pid1] -= damping;
        }
    }
}
