//! Fixed-step time integrators for the two-body orbit
//!
//! Provides explicit Euler and classical RK4 schemes, both driven by an
//! injected [`Acceleration`], plus the driver that picks one by name and
//! fills a pre-allocated trajectory in place

use std::fmt;
use std::str::FromStr;

use super::error::{SimError, SimResult};
use super::forces::Acceleration;
use super::states::NVec2;

/// Integration policy, decided once from the configured method name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Euler, // explicit first-order Euler
    Rk4, // classical fourth-order Runge–Kutta
}

impl Method {
    /// Display label used in titles and reports
    pub fn label(&self) -> &'static str {
        match self {
            Method::Euler => "Euler",
            Method::Rk4 => "RK4",
        }
    }
}

impl FromStr for Method {
    type Err = SimError;

    /// Case-insensitive: "euler", "Euler" and "EULER" all select [`Method::Euler`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "euler" => Ok(Method::Euler),
            "rk4" => Ok(Method::Rk4),
            _ => Err(SimError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Euler => write!(f, "euler"),
            Method::Rk4 => write!(f, "rk4"),
        }
    }
}

/// Fill `r[1..]`, `v[1..]` with explicit Euler steps from the state at index 0
///
/// Both updates of step i read only step i-1:
/// v_i = v_(i-1) + a(r_(i-1)) dt
/// r_i = r_(i-1) + v_(i-1) dt
pub fn euler_step<A>(accel: &A, r: &mut [NVec2], v: &mut [NVec2], dt: f64)
where
    A: Acceleration + ?Sized,
{
    let n = r.len().min(v.len());

    for i in 1..n {
        // Previous state, copied so the writes below cannot feed back into this step
        let r_prev = r[i - 1];
        let v_prev = v[i - 1];

        v[i] = v_prev + accel.acceleration(&r_prev) * dt;

        // Old velocity on purpose: using v[i] here would be semi-implicit Euler
        r[i] = r_prev + v_prev * dt;
    }
}

/// Fill `r[1..]`, `v[1..]` with classical RK4 steps from the state at index 0
///
/// The system integrated is dr/dt = v, dv/dt = a(r). All four stages of
/// step i are evaluated from the state at i-1
pub fn rk4_step<A>(accel: &A, r: &mut [NVec2], v: &mut [NVec2], dt: f64)
where
    A: Acceleration + ?Sized,
{
    let n = r.len().min(v.len());
    let half_dt = 0.5 * dt; // dt/2 for the two midpoint stages
    let sixth_dt = dt / 6.0; // weight of the final combination

    for i in 1..n {
        let r_prev = r[i - 1];
        let v_prev = v[i - 1];

        // Stage 1: slopes at the start of the step
        let k1v = accel.acceleration(&r_prev);
        let k1r = v_prev;

        // Stage 2: midpoint, using stage 1 slopes
        let k2v = accel.acceleration(&(r_prev + k1r * half_dt));
        let k2r = v_prev + k1v * half_dt;

        // Stage 3: midpoint again, using stage 2 slopes
        let k3v = accel.acceleration(&(r_prev + k2r * half_dt));
        let k3r = v_prev + k2v * half_dt;

        // Stage 4: end of the step, using stage 3 slopes
        let k4v = accel.acceleration(&(r_prev + k3r * dt));
        let k4r = v_prev + k3v * dt;

        // Weighted combination: (k1 + 2 k2 + 2 k3 + k4) dt/6
        v[i] = v_prev + (k1v + 2.0 * k2v + 2.0 * k3v + k4v) * sixth_dt;
        r[i] = r_prev + (k1r + 2.0 * k2r + 2.0 * k3r + k4r) * sixth_dt;
    }
}

/// Parse `method` and integrate the whole trajectory with it
///
/// Returns the selected [`Method`]. On any error nothing past index 0 has
/// been written
pub fn integrate<A>(accel: &A, r: &mut [NVec2], v: &mut [NVec2], dt: f64, method: &str) -> SimResult<Method>
where
    A: Acceleration + ?Sized,
{
    let method: Method = method.parse()?;
    integrate_with(accel, r, v, dt, method)?;
    Ok(method)
}

/// Integrate the whole trajectory with an already selected [`Method`]
pub fn integrate_with<A>(accel: &A, r: &mut [NVec2], v: &mut [NVec2], dt: f64, method: Method) -> SimResult<()>
where
    A: Acceleration + ?Sized,
{
    check_buffers(r, v)?;

    match method {
        Method::Euler => euler_step(accel, r, v, dt),
        Method::Rk4 => rk4_step(accel, r, v, dt),
    }
    Ok(())
}

/// Buffers must pair up, be non-empty, and start away from the central mass
fn check_buffers(r: &[NVec2], v: &[NVec2]) -> SimResult<()> {
    if r.len() != v.len() {
        return Err(SimError::LengthMismatch {
            positions: r.len(),
            velocities: v.len(),
        });
    }

    match r.first() {
        None => Err(SimError::EmptyTrajectory),
        Some(r0) if *r0 == NVec2::zeros() => Err(SimError::SingularPosition),
        Some(_) => Ok(()),
    }
}
