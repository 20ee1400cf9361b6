//! Sampled vector fields used as environmental input
//!
//! A [`VectorField`] maps a 3D position to a 3D vector. The drag force uses
//! one as ambient wind: air resistance acts on the particle velocity relative
//! to the sampled flow. Fields are stateless and shared read-only; absence of
//! a field (no wind) degrades drag to pure resistance against the particle's
//! own velocity

use crate::simulation::states::NVec3;

/// A pure function from position to vector
///
/// Implementations must be total (defined for all inputs), deterministic,
/// and side-effect free
pub trait VectorField {
    fn sample(&self, x: &NVec3) -> NVec3;
}

/// A field returning the same vector everywhere (uniform wind)
#[derive(Debug, Clone, Copy)]
pub struct ConstantVectorField {
    value: NVec3,
}

impl ConstantVectorField {
    pub fn new(value: NVec3) -> Self {
        Self { value }
    }
}

impl VectorField for ConstantVectorField {
    fn sample(&self, _x: &NVec3) -> NVec3 {
        self.value
    }
}
