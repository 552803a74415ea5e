//! Configuration types for loading orbit scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! single-planet scenario. A scenario consists of:
//!
//! - [`PlanetInfoConfig`]         – display name and marker colors
//! - [`InitialConditionsConfig`]  – state at perihelion, in Gm and km/s
//! - [`TimeSettingsConfig`]       – step size (s) and simulated span (days)
//! - [`NumericalIntegrationConfig`] – integration method name
//! - [`ConstantsConfig`]          – optional physical constants
//! - [`DisplayConfig`]            – optional viewer settings
//! - [`ScenarioConfig`]           – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! planet_info:
//!   name: "Earth"
//!   perihelion_color: "blue"
//!   aphelion_color: "orange"
//!
//! initial_conditions:
//!   position_at_perihelion: [147.1, 0.0]   # Gm
//!   velocity_at_perihelion: [0.0, 30.29]   # km/s
//!   flip_velocity_y: true                  # optional, default true
//!
//! time_settings:
//!   time_step: 3600.0                      # seconds
//!   simulation_time: 365.0                 # days
//!
//! numerical_integration:
//!   method: "rk4"                          # or "euler", any case
//!
//! constants:                               # optional
//!   G: 6.6743e-11
//!   M: 1.989e30
//!
//! display:                                 # optional
//!   dimension: false                       # false -> 2D, true -> 3D
//! ```
//!
//! The method name is kept as written; it is parsed (case-insensitively)
//! when the run starts, so a bad name surfaces as an integration error

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::simulation::params::{G_NEWTON, M_SUN};

/// Planet identity and plot styling
#[derive(Deserialize, Debug, Clone)]
pub struct PlanetInfoConfig {
    pub name: String, // display name, e.g. "Earth"
    pub perihelion_color: String, // marker color at the start of the orbit
    pub aphelion_color: String, // marker color at the farthest point
}

/// State of the planet at perihelion, in input units
#[derive(Deserialize, Debug, Clone)]
pub struct InitialConditionsConfig {
    pub position_at_perihelion: [f64; 2], // gigameters
    pub velocity_at_perihelion: [f64; 2], // km/s
    #[serde(default = "default_flip_velocity_y")]
    pub flip_velocity_y: bool, // negate the y velocity (dataset sign convention)
}

fn default_flip_velocity_y() -> bool {
    true
}

#[derive(Deserialize, Debug, Clone)]
pub struct TimeSettingsConfig {
    pub time_step: f64, // seconds
    pub simulation_time: f64, // days
}

#[derive(Deserialize, Debug, Clone)]
pub struct NumericalIntegrationConfig {
    pub method: String, // "euler" or "rk4"
}

/// Physical constants, defaulting to G and the solar mass
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ConstantsConfig {
    #[serde(default = "default_g")]
    pub G: f64,
    #[serde(default = "default_m")]
    pub M: f64,
}

fn default_g() -> f64 {
    G_NEWTON
}

fn default_m() -> f64 {
    M_SUN
}

impl Default for ConstantsConfig {
    fn default() -> Self {
        Self { G: G_NEWTON, M: M_SUN }
    }
}

/// Viewer settings
#[derive(Deserialize, Debug, Clone, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub dimension: bool, // `false` - 2D viewer, `true` - 3D viewer
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub planet_info: PlanetInfoConfig,
    pub initial_conditions: InitialConditionsConfig,
    pub time_settings: TimeSettingsConfig,
    pub numerical_integration: NumericalIntegrationConfig,
    #[serde(default)]
    pub constants: ConstantsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl ScenarioConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("invalid scenario YAML")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("failed to open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        let cfg = serde_yaml::from_reader(reader).with_context(|| format!("failed to parse scenario {}", path.display()))?;
        Ok(cfg)
    }
}
