pub mod orbit_vis2d;
pub mod orbit_vis3d;
pub mod palette;

use crate::simulation::states::NVec2;

/// Screen distance (px / world units) the aphelion is drawn at
pub const VIEW_RADIUS: f32 = 300.0;

/// Meters -> screen units so the farthest point lands on `VIEW_RADIUS`
pub fn screen_scale(extent: f64) -> f32 {
    if extent.is_finite() && extent > 0.0 {
        VIEW_RADIUS / extent as f32
    } else {
        1.0
    }
}

/// Every how many samples to draw an orbit dot, keeping at most `max_dots`
pub fn dot_stride(n: usize, max_dots: usize) -> usize {
    (n / max_dots.max(1)).max(1)
}

pub(crate) fn to_screen(p: &NVec2, scale: f32) -> (f32, f32) {
    (p.x as f32 * scale, p.y as f32 * scale)
}
