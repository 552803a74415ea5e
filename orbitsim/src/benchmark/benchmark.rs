use std::f64::consts::TAU;
use std::time::Instant;

use crate::simulation::forces::CentralGravity;
use crate::simulation::integrator::{euler_step, rk4_step};
use crate::simulation::states::{NVec2, Trajectory};

/// Unit circular orbit: G = M = 1, radius 1, speed 1, period 2 pi
fn unit_gravity() -> CentralGravity {
    CentralGravity { G: 1.0, M: 1.0 }
}

fn unit_circle(n: usize) -> Trajectory {
    Trajectory::with_initial(NVec2::new(1.0, 0.0), NVec2::new(0.0, 1.0), n)
}

/// Largest deviation of |r| from the unit radius along a trajectory
pub fn max_radius_error(traj: &Trajectory) -> f64 {
    traj.r.iter().map(|p| (p.norm() - 1.0).abs()).fold(0.0, f64::max)
}

/// Radius error of both schemes after one period of the unit circular orbit
/// sampled with `steps` steps
pub fn circular_orbit_errors(steps: usize) -> (f64, f64) {
    let gravity = unit_gravity();
    let dt = TAU / steps as f64;

    let mut euler = unit_circle(steps + 1);
    let (r, v) = euler.buffers_mut();
    euler_step(&gravity, r, v, dt);

    let mut rk4 = unit_circle(steps + 1);
    let (r, v) = rk4.buffers_mut();
    rk4_step(&gravity, r, v, dt);

    (max_radius_error(&euler), max_radius_error(&rk4))
}

/// Wall-clock cost per step of Euler vs RK4 for growing trajectory lengths
pub fn bench_integrators() {
    let ns = [1_000, 10_000, 100_000, 1_000_000];
    let gravity = unit_gravity();

    for n in ns {
        let dt = TAU / n as f64;

        // Warm up
        let mut warm = unit_circle(n.min(1_000));
        let (r, v) = warm.buffers_mut();
        rk4_step(&gravity, r, v, dt);

        // Time euler
        let mut traj = unit_circle(n);
        let (r, v) = traj.buffers_mut();
        let t0 = Instant::now();
        euler_step(&gravity, r, v, dt);
        let euler_ns = t0.elapsed().as_secs_f64() * 1e9 / n as f64;

        // Time rk4
        let mut traj = unit_circle(n);
        let (r, v) = traj.buffers_mut();
        let t1 = Instant::now();
        rk4_step(&gravity, r, v, dt);
        let rk4_ns = t1.elapsed().as_secs_f64() * 1e9 / n as f64;

        println!("N = {:8}, euler = {:8.2} ns/step, rk4 = {:8.2} ns/step", n, euler_ns, rk4_ns);
    }
}

/// Radius error after one orbit against step size
/// Paste output directly into a spreadsheet to graph
pub fn bench_convergence_curve() {
    println!("steps,dt,euler_err,rk4_err");

    for steps in (50..=3200).step_by(50) {
        let (euler_err, rk4_err) = circular_orbit_errors(steps);
        println!("{},{:.6e},{:.6e},{:.6e}", steps, TAU / steps as f64, euler_err, rk4_err);
    }
}
