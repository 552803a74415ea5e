//! High-level runtime engine settings
//!
//! Carries the configured integration method and the viewer dimension
//! used when running and displaying a `Scenario`

#[derive(Debug, Clone)]
pub struct Engine {
    pub method: String, // integration method as configured, parsed at run time
    pub dimension: bool, // false = 2D, true = 3D
}
