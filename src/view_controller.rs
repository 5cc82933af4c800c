//! Pure pan/zoom math, kept free of any rendering infrastructure so the
//! interaction logic can be tested headlessly.

use glam::DVec2;

use crate::data_types::Bounds;
use crate::geometry::lerp;

pub struct ViewController;

impl ViewController {
    /// Derive the active data bounds from the fixed default bounds and the
    /// current transform state.
    ///
    /// Each edge is translated by `offset`, then moved toward the translated
    /// center by `scale²` (squared: the scale applies uniformly to both
    /// dimensions of the visible area). `scale = 1` with a zero offset
    /// reproduces the default bounds exactly; `scale < 1` zooms in.
    ///
    /// This is a pure function of its inputs and must be recomputed on every
    /// transform change, never integrated incrementally.
    pub fn active_data_bounds(default_bounds: &Bounds, offset: DVec2, scale: f64) -> Bounds {
        let mut bounds = Bounds::new(
            default_bounds.left + offset.x,
            default_bounds.right + offset.x,
            default_bounds.top + offset.y,
            default_bounds.bottom + offset.y,
        );
        let center = bounds.center();
        let area_scale = scale * scale;
        bounds.left = lerp(center.x, bounds.left, area_scale);
        bounds.right = lerp(center.x, bounds.right, area_scale);
        bounds.top = lerp(center.y, bounds.top, area_scale);
        bounds.bottom = lerp(center.y, bounds.bottom, area_scale);
        bounds
    }

    /// In-progress pan delta for a drag gesture, in data-space units.
    pub fn drag_offset(start: DVec2, end: DVec2, scale: f64) -> DVec2 {
        (start - end) * scale
    }

    /// Apply one wheel notch to the scale, clamped to `[min, max]`.
    pub fn step_scale(scale: f64, direction: f64, step: f64, min: f64, max: f64) -> f64 {
        (scale + direction * step).clamp(min, max)
    }
}
