//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! mass-spring scenario. A scenario consists of:
//!
//! - [`RunConfig`]        – host loop settings (total time, step size)
//! - [`ParametersConfig`] – physical constants for the spring chain
//! - [`ChainConfig`]      – chain topology (particle count and spacing)
//! - [`ConstraintConfig`] – hard pins applied after every step
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! run:
//!   t_end: 10.0             # total simulated time
//!   h0: 0.0166667           # fixed step size (1/60 s)
//!
//! parameters:
//!   mass: 1.0               # uniform particle mass
//!   gravity: [0.0, -9.8, 0.0]
//!   stiffness: 500.0        # spring constant
//!   rest_length: 2.0        # zero-force spring separation
//!   damping_coefficient: 1.0
//!   drag_coefficient: 0.1
//!   floor_y: -10.0          # floor height on the Y axis
//!   restitution: 0.3        # bounce retention in [0, 1]
//!
//! chain:
//!   count: 10               # number of particles
//!   spacing: 1.0            # initial separation along -X
//!
//! wind: [30.0, 0.0, 0.0]    # optional constant wind field; omit for no wind
//!
//! constraints:
//!   - point_index: 0        # pin the first particle at the origin
//!     position: [0.0, 0.0, 0.0]
//!     velocity: [0.0, 0.0, 0.0]
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! representation (`Scenario`), validating every range and index

use serde::Deserialize;

/// Host loop settings: how long to run and with what fixed step
#[derive(Deserialize, Debug, Clone)]
pub struct RunConfig {
    pub t_end: f64, // total simulated time
    pub h0: f64,    // fixed step size supplied per step
}

/// Physical constants for one simulation instance
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub mass: f64,                // uniform particle mass, > 0
    pub gravity: [f64; 3],        // gravitational acceleration
    pub stiffness: f64,           // spring constant, >= 0
    pub rest_length: f64,         // spring rest length, >= 0
    pub damping_coefficient: f64, // edge damping, >= 0
    pub drag_coefficient: f64,    // air drag, >= 0
    pub floor_y: f64,             // floor height on the Y axis
    pub restitution: f64,         // bounce retention in [0, 1]
}

/// Chain topology: a simple path of `count` particles
#[derive(Deserialize, Debug, Clone)]
pub struct ChainConfig {
    pub count: usize, // number of particles, >= 1
    pub spacing: f64, // initial separation along -X
}

/// Configuration for a single hard pin
#[derive(Deserialize, Debug)]
pub struct ConstraintConfig {
    pub point_index: usize,  // index of the pinned particle
    pub position: [f64; 3],  // position enforced every step
    pub velocity: [f64; 3],  // velocity enforced every step
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub run: RunConfig,               // host loop settings
    pub parameters: ParametersConfig, // physical constants
    pub chain: ChainConfig,           // chain topology
    pub wind: Option<[f64; 3]>,       // constant wind field; None for no wind
    #[serde(default)]
    pub constraints: Vec<ConstraintConfig>, // hard pins
}
