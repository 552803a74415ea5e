//! Core state types for the two-body orbit simulation.
//!
//! Defines the planar state vector alias and the run buffers:
//! - `NVec2`      position (m) or velocity (m/s) using nalgebra
//! - `Trajectory` paired position/velocity series, one entry per time index
//! - `TimeGrid`   fixed step size and step count of a run

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Position and velocity series of one run
///
/// Index 0 holds the initial condition; the remaining slots start at zero
/// and are overwritten in order by an integration scheme
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub r: Vec<NVec2>, // position per time index
    pub v: Vec<NVec2>, // velocity per time index
}

impl Trajectory {
    /// Allocate `n` slots for both series and write the initial condition at index 0
    /// `n == 0` yields empty buffers
    pub fn with_initial(r0: NVec2, v0: NVec2, n: usize) -> Self {
        let mut r = vec![NVec2::zeros(); n];
        let mut v = vec![NVec2::zeros(); n];
        if let (Some(r_first), Some(v_first)) = (r.first_mut(), v.first_mut()) {
            *r_first = r0;
            *v_first = v0;
        }
        Self { r, v }
    }

    pub fn len(&self) -> usize {
        self.r.len()
    }

    pub fn is_empty(&self) -> bool {
        self.r.is_empty()
    }

    /// Borrow both series mutably at once, for handing to an integrator
    pub fn buffers_mut(&mut self) -> (&mut [NVec2], &mut [NVec2]) {
        (self.r.as_mut_slice(), self.v.as_mut_slice())
    }
}

/// Uniform time grid `[0, duration)` sampled every `dt`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    pub dt: f64, // step size (s)
    pub steps: usize, // number of samples, including t = 0
}

impl TimeGrid {
    /// Number of samples is `ceil(duration / dt)`, so the last sample lies before `duration`
    pub fn new(duration: f64, dt: f64) -> Self {
        let steps = if dt > 0.0 && duration > 0.0 {
            (duration / dt).ceil() as usize
        } else {
            0
        };
        Self { dt, steps }
    }

    /// Time of sample `i`
    pub fn time_at(&self, i: usize) -> f64 {
        i as f64 * self.dt
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.steps).map(|i| self.time_at(i))
    }
}
