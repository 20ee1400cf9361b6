//! Physical parameters for the mass-spring simulation
//!
//! `Parameters` holds the scalar and vector constants of one simulation:
//! - uniform particle mass and gravity,
//! - spring stiffness, rest length, damping and drag coefficients,
//! - floor height and restitution
//!
//! The struct is immutable during a step; parameter changes swap the whole
//! struct between steps (and a particle-count change rebuilds the system)

use crate::simulation::error::SimulationError;
use crate::simulation::states::NVec3;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub mass: f64,                // uniform particle mass, > 0
    pub gravity: NVec3,           // gravitational acceleration
    pub stiffness: f64,           // spring constant, >= 0
    pub rest_length: f64,         // spring rest length, >= 0
    pub damping_coefficient: f64, // edge damping, >= 0
    pub drag_coefficient: f64,    // air drag, >= 0
    pub floor_y: f64,             // floor height on the Y axis
    pub restitution: f64,         // bounce retention in [0, 1]
}

impl Parameters {
    /// Check every parameter range at construction time
    ///
    /// The integrator divides by mass and scales by restitution without
    /// further checks, so a bad value here would otherwise surface only as
    /// NaN positions many steps later
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(SimulationError::InvalidParameter {
                name: "mass",
                value: self.mass,
            });
        }
        if !self.gravity.iter().all(|c| c.is_finite()) {
            return Err(SimulationError::InvalidParameter {
                name: "gravity",
                value: self.gravity.norm(),
            });
        }
        if !(self.stiffness.is_finite() && self.stiffness >= 0.0) {
            return Err(SimulationError::InvalidParameter {
                name: "stiffness",
                value: self.stiffness,
            });
        }
        if !(self.rest_length.is_finite() && self.rest_length >= 0.0) {
            return Err(SimulationError::InvalidParameter {
                name: "rest_length",
                value: self.rest_length,
            });
        }
        if !(self.damping_coefficient.is_finite() && self.damping_coefficient >= 0.0) {
            return Err(SimulationError::InvalidParameter {
                name: "damping_coefficient",
                value: self.damping_coefficient,
            });
        }
        if !(self.drag_coefficient.is_finite() && self.drag_coefficient >= 0.0) {
            return Err(SimulationError::InvalidParameter {
                name: "drag_coefficient",
                value: self.drag_coefficient,
            });
        }
        if !self.floor_y.is_finite() {
            return Err(SimulationError::InvalidParameter {
                name: "floor_y",
                value: self.floor_y,
            });
        }
        if !(self.restitution.is_finite() && (0.0..=1.0).contains(&self.restitution)) {
            return Err(SimulationError::InvalidParameter {
                name: "restitution",
                value: self.restitution,
            });
        }
        Ok(())
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            mass: 1.0,
            gravity: NVec3::new(0.0, -9.8, 0.0),
            stiffness: 500.0,
            rest_length: 2.0,
            damping_coefficient: 1.0,
            drag_coefficient: 0.1,
            floor_y: -10.0,
            restitution: 0.3,
        }
    }
}
