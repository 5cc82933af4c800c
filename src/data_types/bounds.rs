use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::data_types::Sample;
use crate::geometry::remap;

/// Axis-aligned rectangle in either pixel or data space.
///
/// In pixel space the origin is top-left and y grows downward; in data space
/// `top` holds the maximum data y so that [`Bounds::remap_point`] inverts the
/// y axis consistently. `left`/`right` and `top`/`bottom` are paired "from"
/// and "to" corners of one axis each; they are never reordered independently,
/// and `left <= right` is not an invariant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Data bounds of a sample set: min/max x, with `top` the maximum y.
    ///
    /// Returns `None` for an empty slice.
    pub fn of_samples(samples: &[Sample]) -> Option<Self> {
        let first = samples.first()?.point;
        let mut bounds = Self::new(first.x, first.x, first.y, first.y);
        for sample in &samples[1..] {
            bounds.left = bounds.left.min(sample.point.x);
            bounds.right = bounds.right.max(sample.point.x);
            bounds.top = bounds.top.max(sample.point.y);
            bounds.bottom = bounds.bottom.min(sample.point.y);
        }
        Some(bounds)
    }

    /// Pixel rectangle inset from a square surface by `margin` on every edge.
    pub fn inset(size: f64, margin: f64) -> Self {
        Self {
            left: margin,
            right: size - margin,
            top: margin,
            bottom: size - margin,
        }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Map a point from this rectangle's space into `to`'s space.
    ///
    /// X follows the `(left, right)` pair, y the `(top, bottom)` pair. The
    /// same call serves data→pixel and pixel→data; direction is purely
    /// argument order. Degenerate source ranges produce infinite or NaN
    /// coordinates (garbage in, garbage rendered).
    pub fn remap_point(&self, to: &Bounds, point: DVec2) -> DVec2 {
        DVec2::new(
            remap(self.left, self.right, to.left, to.right, point.x),
            remap(self.top, self.bottom, to.top, to.bottom, point.y),
        )
    }
}
