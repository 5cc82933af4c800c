use glam::DVec2;

/// Accumulated pan offset and zoom scale applied to the default data bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Confirmed pan, in data-space units.
    pub offset: DVec2,
    pub scale: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            offset: DVec2::ZERO,
            scale: 1.0,
        }
    }
}

/// Transient drag-gesture state, reset at the start of each gesture.
///
/// `offset` is the in-progress data-space delta not yet committed to the
/// view transform. It survives pointer-up so the click handler can tell a
/// drag apart from a click.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub start: DVec2,
    pub end: DVec2,
    pub offset: DVec2,
    pub dragging: bool,
}
