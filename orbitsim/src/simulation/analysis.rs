//! Post-processing of a completed trajectory
//!
//! Finds the aphelion (farthest point from the central mass) and the
//! perihelion (closest point), together with the speed at each

use super::error::{SimError, SimResult};
use super::params::{METERS_PER_GIGAMETER, MPS_PER_KMPS};
use super::states::NVec2;

/// Orbit extreme found by scanning a trajectory
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AphelionRecord {
    pub index: usize, // time index of the extreme
    pub distance: f64, // |r| at that index (m)
    pub speed: f64, // |v| at that index (m/s)
}

impl AphelionRecord {
    /// Two-line report, distance in million km and speed in km/s
    pub fn caption(&self, planet: &str) -> String {
        format!(
            "At Aphelion, the {} is {:.1} million km away from the sun\nMoving at the speed of {:.1}km/s",
            planet,
            self.distance / METERS_PER_GIGAMETER,
            self.speed / MPS_PER_KMPS,
        )
    }
}

/// Farthest point from the origin; the first index wins on ties
pub fn find_aphelion(r: &[NVec2], v: &[NVec2]) -> SimResult<AphelionRecord> {
    find_extreme(r, v, |candidate, best| candidate > best)
}

/// Closest point to the origin; the first index wins on ties
pub fn find_perihelion(r: &[NVec2], v: &[NVec2]) -> SimResult<AphelionRecord> {
    find_extreme(r, v, |candidate, best| candidate < best)
}

// Strict comparison keeps the earliest index when distances are equal
fn find_extreme<F>(r: &[NVec2], v: &[NVec2], better: F) -> SimResult<AphelionRecord>
where
    F: Fn(f64, f64) -> bool,
{
    if r.len() != v.len() {
        return Err(SimError::LengthMismatch {
            positions: r.len(),
            velocities: v.len(),
        });
    }

    let mut distances = r.iter().map(|x| x.norm()).enumerate();
    let (mut index, mut distance) = distances.next().ok_or(SimError::EmptyTrajectory)?;

    for (i, d) in distances {
        if better(d, distance) {
            index = i;
            distance = d;
        }
    }

    Ok(AphelionRecord {
        index,
        distance,
        speed: v[index].norm(),
    })
}
