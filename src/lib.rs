pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Constraint, Edge, NVec3, ParticleSystem};
pub use simulation::fields::{ConstantVectorField, VectorField};
pub use simulation::forces::{AirDrag, Force, ForceSet, Gravity, SpringDamper};
pub use simulation::integrator::{apply_constraints, semi_implicit_euler};
pub use simulation::params::Parameters;
pub use simulation::engine::{Frame, Simulation};
pub use simulation::scenario::{make_chain, Scenario};
pub use simulation::error::SimulationError;

pub use configuration::config::{
    ChainConfig, ConstraintConfig, ParametersConfig, RunConfig, ScenarioConfig,
};

pub use benchmark::benchmark::{bench_forces, bench_step, bench_step_curve};
