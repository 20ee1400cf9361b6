pub mod states;
pub mod params;
pub mod engine;
pub mod error;
pub mod fields;
pub mod forces;
pub mod integrator;
pub mod scenario;
