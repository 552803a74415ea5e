pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{NVec2, Trajectory, TimeGrid};
pub use simulation::forces::{acceleration, Acceleration, CentralGravity};
pub use simulation::integrator::{euler_step, rk4_step, integrate, integrate_with, Method};
pub use simulation::analysis::{find_aphelion, find_perihelion, AphelionRecord};
pub use simulation::error::{SimError, SimResult};
pub use simulation::scenario::{Scenario, OrbitRun};

pub use configuration::config::ScenarioConfig;

pub use visualization::{orbit_vis2d::run_2d, orbit_vis3d::run_3d};

pub use benchmark::benchmark::{bench_integrators, bench_convergence_curve, circular_orbit_errors};
