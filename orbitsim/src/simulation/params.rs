//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and total duration,
//! - gravitational constant and central mass (`G`, `M`)
//!
//! Also the unit conversions applied to configuration input

/// Universal gravitational constant (m^3 kg^-1 s^-2)
pub const G_NEWTON: f64 = 6.6743e-11;

/// Solar mass (kg)
pub const M_SUN: f64 = 1.989e30;

pub const METERS_PER_GIGAMETER: f64 = 1e9;
pub const MPS_PER_KMPS: f64 = 1e3;
pub const SECONDS_PER_DAY: f64 = 24.0 * 3600.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size (s)
    pub t_end: f64, // total simulated time (s)
    pub G: f64, // gravitational constant
    pub M: f64, // central mass (kg)
}
