//! Pointer state machine: drag lifecycle, hover tracking, and selection.
//!
//! Each handler runs to completion and leaves the chart state consistent
//! before returning; the `bool` result tells the embedding event loop
//! whether to call [`ChartView::draw`] again.

use glam::DVec2;
use tracing::{debug, trace};

use crate::hit_test;
use crate::view_controller::ViewController;

use super::ChartView;

impl ChartView {
    /// Begin a drag gesture (Idle → Dragging).
    ///
    /// The anchor is captured in data space through the inverse remap against
    /// the *default* data bounds, so the in-progress delta composes with the
    /// committed offset without drift.
    pub fn pointer_down(&mut self, loc: DVec2) -> bool {
        self.drag.start = self
            .pixel_bounds
            .remap_point(&self.default_data_bounds, loc);
        self.drag.end = DVec2::ZERO;
        self.drag.offset = DVec2::ZERO;
        self.drag.dragging = true;
        false
    }

    /// Track pointer movement.
    ///
    /// While dragging, previews the pan by recomputing the active bounds from
    /// the candidate offset; the committed offset is untouched until
    /// [`ChartView::pointer_up`]. The hover target is refreshed on every
    /// move regardless of drag state.
    pub fn pointer_move(&mut self, loc: DVec2) -> bool {
        if self.drag.dragging {
            self.drag.end = self
                .pixel_bounds
                .remap_point(&self.default_data_bounds, loc);
            self.drag.offset =
                ViewController::drag_offset(self.drag.start, self.drag.end, self.transform.scale);
            let candidate = self.transform.offset + self.drag.offset;
            self.data_bounds = ViewController::active_data_bounds(
                &self.default_data_bounds,
                candidate,
                self.transform.scale,
            );
            trace!(offset = ?self.drag.offset, "drag preview");
        }
        let hover_changed = self.update_hover(loc);
        self.drag.dragging || hover_changed
    }

    /// End a drag gesture (Dragging → Idle), committing the pan.
    ///
    /// `drag.offset` is deliberately left in place: the click handler reads
    /// it to tell a completed drag apart from a plain click.
    pub fn pointer_up(&mut self, _loc: DVec2) -> bool {
        if !self.drag.dragging {
            return false;
        }
        self.transform.offset += self.drag.offset;
        self.drag.dragging = false;
        true
    }

    /// Apply one wheel notch; only the sign of `delta_y` matters.
    ///
    /// The scale is clamped to the configured range and the active bounds are
    /// recomputed from the committed offset. A zero delta is a no-op.
    pub fn wheel(&mut self, delta_y: f64) -> bool {
        let direction = if delta_y > 0.0 {
            1.0
        } else if delta_y < 0.0 {
            -1.0
        } else {
            return false;
        };
        let scale = ViewController::step_scale(
            self.transform.scale,
            direction,
            self.options.wheel_step,
            self.options.min_scale,
            self.options.max_scale,
        );
        if scale == self.transform.scale {
            return false;
        }
        self.transform.scale = scale;
        self.data_bounds = ViewController::active_data_bounds(
            &self.default_data_bounds,
            self.transform.offset,
            scale,
        );
        trace!(scale, "wheel zoom");
        true
    }

    /// Toggle selection at the click location.
    ///
    /// A click that concludes a real drag (`drag.offset` non-zero) is
    /// ignored. Otherwise: clicking a hovered sample selects it, clicking the
    /// already-selected sample deselects it, clicking empty space clears the
    /// selection. The selection listener fires only when the selection
    /// actually changed.
    pub fn click(&mut self, loc: DVec2) -> bool {
        if self.drag.offset != DVec2::ZERO {
            return false;
        }
        let hover_changed = self.update_hover(loc);
        let new_selection = match self.hovered {
            Some(index) if self.selected == Some(index) => None,
            other => other,
        };
        if new_selection != self.selected {
            self.selected = new_selection;
            debug!(selected = ?self.selected_sample().map(|s| s.id), "selection changed");
            self.notify_selection();
            return true;
        }
        hover_changed
    }

    fn update_hover(&mut self, loc: DVec2) -> bool {
        let target = hit_test::hover_target(
            &self.samples,
            &self.data_bounds,
            &self.pixel_bounds,
            loc,
            self.margin / 2.0,
        );
        let changed = target != self.hovered;
        self.hovered = target;
        changed
    }
}
