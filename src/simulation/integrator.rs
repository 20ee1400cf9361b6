//! Fixed-step time integration for the mass-spring system
//!
//! Provides semi-implicit (symplectic) Euler with floor collision, plus the
//! hard constraint pass, both driven by `Parameters`. Velocity is updated
//! first and the position update uses the *new* velocity; this ordering is
//! what keeps stiff spring chains stable and must not be reordered

use super::params::Parameters;
use super::states::{Constraint, ParticleSystem};

/// Advance the system by one step using semi-implicit Euler
///
/// Per particle, independently:
/// - `a = f / m`
/// - `v' = v + dt * a`
/// - `x' = x + dt * v'`
///
/// Floor collision acts on the Y axis only: the position is clamped to the
/// floor and a downward velocity is reflected by the restitution factor,
/// followed by a second partial position update with the post-bounce
/// vertical velocity so the particle does not sink through the floor on the
/// bounce frame. Horizontal motion is untouched by collision.
///
/// Expects `sys.forces` to hold this step's accumulated forces
/// (see `ForceSet::accumulate_forces`); updates positions, velocities,
/// and `sys.t` in place
pub fn semi_implicit_euler(sys: &mut ParticleSystem, params: &Parameters, dt: f64) {
    let inv_mass = 1.0 / params.mass;

    for i in 0..sys.positions.len() {
        // Kick: v' = v + dt * (f / m)
        let acceleration = sys.forces[i] * inv_mass;
        let mut new_velocity = sys.velocities[i] + dt * acceleration;

        // Drift with the updated velocity: x' = x + dt * v'
        let mut new_position = sys.positions[i] + dt * new_velocity;

        // Floor collision with restitution (Y axis only)
        if new_position.y < params.floor_y {
            new_position.y = params.floor_y;

            if new_velocity.y < 0.0 {
                new_velocity.y *= -params.restitution;
                new_position.y += dt * new_velocity.y;
            }
        }

        sys.velocities[i] = new_velocity;
        sys.positions[i] = new_position;
    }

    sys.t += dt;
}

/// Enforce hard positional pins after integration
///
/// Unconditionally overwrites position and velocity for each pinned index,
/// in insertion order (last pin on an index wins). Indices were validated at
/// construction, so direct indexing here cannot go out of range
pub fn apply_constraints(sys: &mut ParticleSystem, constraints: &[Constraint]) {
    for c in constraints {
        sys.positions[c.point_index] = c.fixed_position;
        sys.velocities[c.point_index] = c.fixed_velocity;
    }
}
