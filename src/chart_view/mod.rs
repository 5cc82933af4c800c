pub mod input;
pub mod renderer;

use eyre::{ensure, eyre, Result};
use tracing::debug;

use crate::data_types::{Bounds, ChartOptions, DragState, Sample, ViewTransform};
use crate::rendering::RenderBackend;
use crate::theme::ChartTheme;

type SelectionListener = Box<dyn FnMut(Option<&Sample>)>;

/// The interactive scatter chart widget.
///
/// Owns the sample set, the fixed pixel/default-data bounds, and all
/// interaction state. Pointer handlers (see [`input`]) mutate the state and
/// report whether a redraw is needed; [`ChartView::draw`] replays the current
/// state onto any [`RenderBackend`]. Everything runs synchronously on the
/// caller's thread.
pub struct ChartView {
    samples: Vec<Sample>,
    options: ChartOptions,
    theme: ChartTheme,
    margin: f64,
    pixel_bounds: Bounds,
    default_data_bounds: Bounds,
    /// Derived view window, recomputed on every transform change.
    data_bounds: Bounds,
    transform: ViewTransform,
    drag: DragState,
    hovered: Option<usize>,
    selected: Option<usize>,
    selection_listener: Option<SelectionListener>,
}

impl ChartView {
    /// Build a chart over a non-empty sample set.
    ///
    /// The default data bounds are computed once here and serve as the
    /// pan/zoom reference frame for the lifetime of the chart.
    pub fn new(samples: Vec<Sample>, options: ChartOptions) -> Result<Self> {
        ensure!(!samples.is_empty(), "chart requires at least one sample");
        let default_data_bounds = Bounds::of_samples(&samples)
            .ok_or_else(|| eyre!("sample set has no data bounds"))?;
        let margin = options.margin();
        let pixel_bounds = Bounds::inset(options.size, margin);
        debug!(
            samples = samples.len(),
            size = options.size,
            "chart view constructed"
        );
        Ok(Self {
            samples,
            options,
            theme: ChartTheme::default(),
            margin,
            pixel_bounds,
            default_data_bounds,
            data_bounds: default_data_bounds,
            transform: ViewTransform::default(),
            drag: DragState::default(),
            hovered: None,
            selected: None,
            selection_listener: None,
        })
    }

    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Register the selection-changed callback.
    ///
    /// Fires once per pointer-driven selection change with the newly selected
    /// sample, or `None` when the selection was cleared.
    pub fn on_selection_change(&mut self, listener: impl FnMut(Option<&Sample>) + 'static) {
        self.selection_listener = Some(Box::new(listener));
    }

    /// Force the selection to the sample with the given id (or clear it),
    /// bypassing the click drag-disambiguation. Does not fire the selection
    /// listener; the caller initiated the change.
    pub fn select_sample(&mut self, id: Option<u64>) {
        self.selected = id.and_then(|id| self.samples.iter().position(|s| s.id == id));
    }

    /// Replay the current state onto a backend; see [`renderer`] for the
    /// pass order.
    pub fn draw(&self, backend: &mut dyn RenderBackend) {
        renderer::draw_chart(self, backend);
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn hovered_sample(&self) -> Option<&Sample> {
        self.hovered.map(|index| &self.samples[index])
    }

    pub fn selected_sample(&self) -> Option<&Sample> {
        self.selected.map(|index| &self.samples[index])
    }

    /// The active data bounds under the current pan/zoom.
    pub fn data_bounds(&self) -> Bounds {
        self.data_bounds
    }

    pub fn default_data_bounds(&self) -> Bounds {
        self.default_data_bounds
    }

    pub fn pixel_bounds(&self) -> Bounds {
        self.pixel_bounds
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    fn notify_selection(&mut self) {
        if let Some(listener) = self.selection_listener.as_mut() {
            let selected = self.selected.map(|index| &self.samples[index]);
            listener(selected);
        }
    }
}

impl std::fmt::Debug for ChartView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartView")
            .field("samples", &self.samples.len())
            .field("transform", &self.transform)
            .field("hovered", &self.hovered)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}
