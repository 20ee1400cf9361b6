//! Build fully-initialized simulations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - the particle system (chain topology at rest)
//! - physical parameters (`Parameters`)
//! - the active force set with optional wind
//! - hard pins from the configuration
//!
//! The host consumes the bundle and drives [`Simulation::advance`] with its
//! own per-step time deltas

use std::sync::Arc;

use log::info;

use crate::configuration::config::{ConstraintConfig, ScenarioConfig};
use crate::simulation::engine::Simulation;
use crate::simulation::error::SimulationError;
use crate::simulation::fields::{ConstantVectorField, VectorField};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Constraint, Edge, NVec3, ParticleSystem};

/// A runtime scenario: the simulation plus the host's run settings
pub struct Scenario {
    pub simulation: Simulation,
    pub t_end: f64, // total simulated time the host should run
    pub h0: f64,    // fixed step size the host supplies per step
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, SimulationError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            mass: p_cfg.mass,
            gravity: NVec3::new(p_cfg.gravity[0], p_cfg.gravity[1], p_cfg.gravity[2]),
            stiffness: p_cfg.stiffness,
            rest_length: p_cfg.rest_length,
            damping_coefficient: p_cfg.damping_coefficient,
            drag_coefficient: p_cfg.drag_coefficient,
            floor_y: p_cfg.floor_y,
            restitution: p_cfg.restitution,
        };

        // Chain topology at rest
        let system = make_chain(cfg.chain.count, cfg.chain.spacing)?;

        // Pins: map ConstraintConfig -> runtime Constraint using nalgebra vectors
        let constraints: Vec<Constraint> = cfg
            .constraints
            .iter()
            .map(|cc: &ConstraintConfig| Constraint {
                point_index: cc.point_index,
                fixed_position: NVec3::new(cc.position[0], cc.position[1], cc.position[2]),
                fixed_velocity: NVec3::new(cc.velocity[0], cc.velocity[1], cc.velocity[2]),
            })
            .collect();

        // Wind: a constant field, or no field at all (drag then opposes the
        // particle's own velocity only)
        let wind = cfg.wind.map(|w| {
            Arc::new(ConstantVectorField::new(NVec3::new(w[0], w[1], w[2])))
                as Arc<dyn VectorField + Send + Sync>
        });

        info!(
            "built scenario: {} particles, {} edges, {} pins, wind {}",
            system.len(),
            system.edges.len(),
            constraints.len(),
            if wind.is_some() { "on" } else { "off" },
        );

        let simulation = Simulation::new(system, parameters, wind, constraints)?;

        Ok(Self {
            simulation,
            t_end: cfg.run.t_end,
            h0: cfg.run.h0,
        })
    }
}

/// Build a chain of `count` particles spaced along the negative X axis
///
/// Particle `i` starts at `(-i * spacing, 0, 0)` with zero velocity; edge
/// `i` connects particles `i` and `i + 1`, so the chain is a simple path
/// of `count - 1` spring-dampers
pub fn make_chain(count: usize, spacing: f64) -> Result<ParticleSystem, SimulationError> {
    if count == 0 {
        return Err(SimulationError::EmptyChain);
    }
    if !spacing.is_finite() {
        return Err(SimulationError::InvalidParameter {
            name: "spacing",
            value: spacing,
        });
    }

    let edges: Vec<Edge> = (0..count - 1)
        .map(|i| Edge {
            first: i,
            second: i + 1,
        })
        .collect();

    let mut system = ParticleSystem::new(count, edges)?;
    for i in 0..count {
        system.positions[i] = NVec3::new(-(i as f64) * spacing, 0.0, 0.0);
    }

    Ok(system)
}
