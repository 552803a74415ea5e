//! Build fully-initialized orbit scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the pre-allocated trajectory with the initial state at index 0
//! - the active force law (`CentralGravity`)
//!
//! Running a scenario yields an `OrbitRun`, which is inserted into Bevy as a
//! `Resource` and read by the viewers

use bevy::prelude::Resource;

use crate::configuration::config::{PlanetInfoConfig, ScenarioConfig};
use crate::simulation::analysis::{find_aphelion, find_perihelion, AphelionRecord};
use crate::simulation::engine::Engine;
use crate::simulation::error::{SimError, SimResult};
use crate::simulation::forces::CentralGravity;
use crate::simulation::integrator::{integrate, Method};
use crate::simulation::params::{Parameters, METERS_PER_GIGAMETER, MPS_PER_KMPS, SECONDS_PER_DAY};
use crate::simulation::states::{NVec2, TimeGrid, Trajectory};

/// Runtime bundle constructed from a [`ScenarioConfig`], ready to integrate
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub planet: PlanetInfoConfig,
    pub grid: TimeGrid,
    pub trajectory: Trajectory,
    pub forces: CentralGravity,
}

impl Scenario {
    /// Convert input units to SI, apply the velocity sign convention and
    /// allocate the trajectory
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        // Time settings: step in seconds, span in days
        let t_cfg = cfg.time_settings;
        if !(t_cfg.time_step.is_finite() && t_cfg.time_step > 0.0) {
            return Err(SimError::InvalidTimeStep(t_cfg.time_step));
        }
        if !(t_cfg.simulation_time.is_finite() && t_cfg.simulation_time > 0.0) {
            return Err(SimError::InvalidDuration(t_cfg.simulation_time));
        }

        let parameters = Parameters {
            dt: t_cfg.time_step,
            t_end: t_cfg.simulation_time * SECONDS_PER_DAY,
            G: cfg.constants.G,
            M: cfg.constants.M,
        };
        let grid = TimeGrid::new(parameters.t_end, parameters.dt);

        // Initial state: Gm -> m, km/s -> m/s
        let ic = cfg.initial_conditions;
        let r0 = NVec2::from(ic.position_at_perihelion) * METERS_PER_GIGAMETER;
        let mut v0 = NVec2::from(ic.velocity_at_perihelion) * MPS_PER_KMPS;

        // The datasets list the perihelion velocity with the opposite y handedness
        if ic.flip_velocity_y {
            v0.y = -v0.y;
        }

        let trajectory = Trajectory::with_initial(r0, v0, grid.steps);

        let engine = Engine {
            method: cfg.numerical_integration.method,
            dimension: cfg.display.dimension,
        };

        let forces = CentralGravity {
            G: parameters.G,
            M: parameters.M,
        };

        Ok(Self {
            engine,
            parameters,
            planet: cfg.planet_info,
            grid,
            trajectory,
            forces,
        })
    }

    /// Integrate the whole trajectory and locate the orbit extremes
    pub fn run(mut self) -> SimResult<OrbitRun> {
        let (r, v) = self.trajectory.buffers_mut();
        let method = integrate(&self.forces, r, v, self.parameters.dt, &self.engine.method)?;

        let aphelion = find_aphelion(&self.trajectory.r, &self.trajectory.v)?;
        let perihelion = find_perihelion(&self.trajectory.r, &self.trajectory.v)?;

        Ok(OrbitRun {
            planet: self.planet,
            method,
            dimension: self.engine.dimension,
            grid: self.grid,
            trajectory: self.trajectory,
            aphelion,
            perihelion,
        })
    }
}

/// Bevy resource holding a completed run and everything needed to display it
#[derive(Resource, Debug, Clone)]
pub struct OrbitRun {
    pub planet: PlanetInfoConfig,
    pub method: Method,
    pub dimension: bool,
    pub grid: TimeGrid,
    pub trajectory: Trajectory,
    pub aphelion: AphelionRecord,
    pub perihelion: AphelionRecord,
}

impl OrbitRun {
    /// Plot title, e.g. "RK4 Method"
    pub fn title(&self) -> String {
        format!("{} Method", self.method.label())
    }

    pub fn caption(&self) -> String {
        self.aphelion.caption(&self.planet.name)
    }

    /// Largest distance reached, used to fit the orbit on screen
    pub fn extent(&self) -> f64 {
        self.aphelion.distance
    }
}
