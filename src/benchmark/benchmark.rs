use std::time::Instant;

use crate::simulation::engine::Simulation;
use crate::simulation::forces::{ForceSet, SpringDamper};
use crate::simulation::params::Parameters;
use crate::simulation::scenario::make_chain;
use crate::simulation::states::{Constraint, NVec3, ParticleSystem};

/// Helper to build a chain system of size `n` (deterministic, no rand)
fn make_bench_chain(n: usize) -> ParticleSystem {
    // Chain sizes here are always >= 1, so the build cannot fail
    make_chain(n, 1.0).expect("bench chain")
}

/// Helper to build the default parameter set used by all benches
fn make_params() -> Parameters {
    Parameters::default()
}

/// Pin for the chain head, matching the reference scenario
fn head_pin() -> Constraint {
    Constraint {
        point_index: 0,
        fixed_position: NVec3::zeros(),
        fixed_velocity: NVec3::zeros(),
    }
}

/// Time a single force accumulation pass for a range of chain sizes
pub fn bench_forces() {
    // Different chain sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400, 12800];

    for n in ns {
        let mut sys = make_bench_chain(n);
        let params = make_params();

        // Spring-damper alone: the O(E) term dominates; gravity and drag
        // are O(N) and uninteresting on their own
        let springs = ForceSet::new().with(SpringDamper {
            stiffness: params.stiffness,
            rest_length: params.rest_length,
            damping_coefficient: params.damping_coefficient,
        });

        // Warm up
        springs.accumulate_forces(&mut sys);

        let t0 = Instant::now();
        springs.accumulate_forces(&mut sys);
        let dt_springs = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, springs = {:8.6} s", dt_springs);
    }
}

/// Time full simulation steps (forces + integration + pins) per chain size
pub fn bench_step() {
    let ns = [200, 400, 800, 1600, 3200, 6400, 12800];
    let steps = 100; // number of steps per size (tune as needed)
    let dt = 1.0 / 60.0;

    for n in ns {
        let sys = make_bench_chain(n);
        let mut sim = Simulation::new(sys, make_params(), None, vec![head_pin()])
            .expect("bench simulation");

        // Warm-up
        sim.advance(dt).expect("warm-up step");

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.advance(dt).expect("bench step");
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {:5}, step = {:8.6} s", n, per_step);
    }
}

/// Benchmark the full step for a range of n
/// Paste output directly into excel to graph
pub fn bench_step_curve() {
    println!("N,step_ms");

    let dt = 1.0 / 60.0;

    // Steps of 200 to give smoother graph
    for n in (200..=12800).step_by(200) {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 2000 { 200 } else { 50 };

        let sys = make_bench_chain(n);
        let mut sim = Simulation::new(sys, make_params(), None, vec![head_pin()])
            .expect("bench simulation");

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.advance(dt).expect("bench step");
        }
        let elapsed = t0.elapsed().as_secs_f64() * 1000.0; // ms total
        let ms_step = elapsed / steps as f64;

        println!("{},{:.6}", n, ms_step);
    }
}
