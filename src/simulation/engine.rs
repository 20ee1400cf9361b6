//! Simulation driver: frame clock and per-step orchestration
//!
//! `Simulation` owns the particle system, parameters, force set, and pins,
//! and composes one discrete step in strict order:
//! compute forces -> integrate -> enforce constraints.
//!
//! The surrounding host (renderer, CLI loop) supplies the per-step `dt` and
//! reads positions back between steps; it never mutates state mid-step.
//! Parameter or particle-count changes go through [`Simulation::set_parameters`]
//! and [`Simulation::rebuild`], which take effect atomically between steps

use std::sync::Arc;

use log::info;

use crate::simulation::error::SimulationError;
use crate::simulation::fields::VectorField;
use crate::simulation::forces::{AirDrag, ForceSet, Gravity, SpringDamper};
use crate::simulation::integrator::{apply_constraints, semi_implicit_euler};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Constraint, NVec3, ParticleSystem};

/// A discrete frame counter with a fixed per-frame time interval
///
/// The host advances the frame once per rendered/observed frame;
/// [`Simulation::update`] catches the physics up by one step per index
/// increment since the last frame it saw
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub index: u64,
    pub time_interval: f64, // seconds per frame
}

impl Frame {
    pub fn new(index: u64, time_interval: f64) -> Self {
        Self {
            index,
            time_interval,
        }
    }

    /// Advance to the next frame
    pub fn advance(&mut self) {
        self.index += 1;
    }

    /// Skip forward by `delta` frames
    pub fn advance_by(&mut self, delta: u64) {
        self.index += delta;
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            index: 0,
            time_interval: 1.0 / 60.0,
        }
    }
}

/// A fully-initialized simulation: state, parameters, forces, and pins
pub struct Simulation {
    system: ParticleSystem,
    parameters: Parameters,
    forces: ForceSet,
    constraints: Vec<Constraint>,
    wind: Option<Arc<dyn VectorField + Send + Sync>>,
    current_frame: Frame,
}

impl Simulation {
    /// Assemble a simulation from pre-built state
    ///
    /// Validates the parameters and every pin index up front; step-time code
    /// indexes without checks on the strength of this validation
    pub fn new(
        system: ParticleSystem,
        parameters: Parameters,
        wind: Option<Arc<dyn VectorField + Send + Sync>>,
        constraints: Vec<Constraint>,
    ) -> Result<Self, SimulationError> {
        parameters.validate()?;
        validate_constraints(&constraints, system.len())?;

        let forces = build_force_set(&parameters, wind.clone());
        Ok(Self {
            system,
            parameters,
            forces,
            constraints,
            wind,
            current_frame: Frame::default(),
        })
    }

    /// Advance the simulation by exactly one step of `dt` seconds
    ///
    /// Rejects a non-finite or non-positive `dt` before touching any state;
    /// a corrupted step would otherwise propagate NaN positions forever
    pub fn advance(&mut self, dt: f64) -> Result<(), SimulationError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimulationError::InvalidTimeStep(dt));
        }

        self.forces.accumulate_forces(&mut self.system);
        semi_implicit_euler(&mut self.system, &self.parameters, dt);
        apply_constraints(&mut self.system, &self.constraints);

        Ok(())
    }

    /// Catch the physics up to an externally-advanced frame
    ///
    /// Runs one step per frame-index increment since the last frame this
    /// simulation saw, each with the frame's time interval. A frame whose
    /// index has not moved is a no-op
    pub fn update(&mut self, frame: &Frame) -> Result<(), SimulationError> {
        if frame.index > self.current_frame.index {
            let n = frame.index - self.current_frame.index;
            for _ in 0..n {
                self.advance(frame.time_interval)?;
            }
            self.current_frame = *frame;
        }
        Ok(())
    }

    /// Read-only snapshot of the current particle positions
    pub fn positions(&self) -> &[NVec3] {
        &self.system.positions
    }

    /// Read-only snapshot of the current particle velocities
    pub fn velocities(&self) -> &[NVec3] {
        &self.system.velocities
    }

    pub fn system(&self) -> &ParticleSystem {
        &self.system
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Replace the parameters between steps
    ///
    /// The force set is rebuilt so every term sees the new constants; the
    /// particle arrays and topology are untouched
    pub fn set_parameters(&mut self, parameters: Parameters) -> Result<(), SimulationError> {
        parameters.validate()?;
        self.forces = build_force_set(&parameters, self.wind.clone());
        self.parameters = parameters;
        Ok(())
    }

    /// Atomically replace the particle system, parameters, and pins
    ///
    /// This is the restart path: a particle-count change invalidates every
    /// index in the old edges and constraints, so the whole state bundle is
    /// validated first and swapped in one piece. The wind field carries over
    pub fn rebuild(
        &mut self,
        system: ParticleSystem,
        parameters: Parameters,
        constraints: Vec<Constraint>,
    ) -> Result<(), SimulationError> {
        parameters.validate()?;
        validate_constraints(&constraints, system.len())?;

        info!(
            "rebuilding simulation: {} particles, {} edges, {} pins",
            system.len(),
            system.edges.len(),
            constraints.len()
        );

        self.forces = build_force_set(&parameters, self.wind.clone());
        self.system = system;
        self.parameters = parameters;
        self.constraints = constraints;
        self.current_frame = Frame::default();
        Ok(())
    }
}

/// Construct the reference force set (gravity + drag + spring-damper)
/// from one parameter bundle
fn build_force_set(
    params: &Parameters,
    wind: Option<Arc<dyn VectorField + Send + Sync>>,
) -> ForceSet {
    ForceSet::new()
        .with(Gravity {
            gravity: params.gravity,
            mass: params.mass,
        })
        .with(AirDrag {
            drag_coefficient: params.drag_coefficient,
            wind,
        })
        .with(SpringDamper {
            stiffness: params.stiffness,
            rest_length: params.rest_length,
            damping_coefficient: params.damping_coefficient,
        })
}

fn validate_constraints(
    constraints: &[Constraint],
    count: usize,
) -> Result<(), SimulationError> {
    for c in constraints {
        if c.point_index >= count {
            return Err(SimulationError::ConstraintOutOfRange {
                index: c.point_index,
                count,
            });
        }
    }
    Ok(())
}
