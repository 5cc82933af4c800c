//! Interactive scatter chart widget with a pluggable rendering backend.
//!
//! [`ChartView`] owns the samples and all pan/zoom/hover/selection state;
//! pointer handlers translate surface-local events into transform updates,
//! and [`ChartView::draw`] replays the state onto any [`RenderBackend`].

pub mod chart_view;
pub mod data_types;
pub mod geometry;
pub mod rendering;
pub mod theme;
pub mod view_controller;

pub use chart_view::ChartView;
pub use data_types::{
    Bounds, ChartOptions, DragState, IconMode, Sample, SampleStyle, StyleTable, ViewTransform,
};
pub use rendering::{Color, RenderBackend, RenderCommand, RenderList};
pub use theme::ChartTheme;
pub use view_controller::ViewController;
