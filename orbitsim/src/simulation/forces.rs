//! Acceleration model for the two-body engine
//!
//! Defines the acceleration capability handed to the integrators and the
//! Newtonian pull of a stationary central mass at the origin

use crate::simulation::states::NVec2;

/// Acceleration of the orbiting body at a given position
///
/// Integrators only see this single method, so any force law (or a plain
/// closure) can be injected in place of [`CentralGravity`]
pub trait Acceleration {
    fn acceleration(&self, r: &NVec2) -> NVec2;
}

impl<F> Acceleration for F
where
    F: Fn(&NVec2) -> NVec2,
{
    fn acceleration(&self, r: &NVec2) -> NVec2 {
        self(r)
    }
}

/// Newtonian gravity of a central mass `M` fixed at the origin
///
/// No softening: the force law is singular at `r = 0`, callers must keep the
/// body away from the origin (the integration driver rejects a zero start)
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct CentralGravity {
    pub G: f64, // gravitational constant
    pub M: f64, // central mass
}

impl Acceleration for CentralGravity {
    fn acceleration(&self, r: &NVec2) -> NVec2 {
        acceleration(self.G, self.M, r)
    }
}

/// Gravitational acceleration at `r`: a = -(G M / |r|^3) r
///
/// Magnitude is G M / |r|^2, direction from the body toward the origin.
/// Returns non-finite components for `r = 0`
#[allow(non_snake_case)]
pub fn acceleration(G: f64, M: f64, r: &NVec2) -> NVec2 {
    // |r|, distance from the central mass
    let dist = r.norm();

    // 1 / |r|^3
    let inv_r3 = (dist * dist * dist).recip();

    // The negative sign points the acceleration back toward the origin
    -(G * M * inv_r3) * *r
}
