//! Stateless per-frame draw pass.
//!
//! Pass order: clear, samples at reduced alpha, hover emphasis, selection
//! emphasis (so selection visually dominates), axes last so the margin
//! strips mask data that pans under the labels.

use std::f64::consts::FRAC_PI_2;

use glam::DVec2;

use crate::data_types::{IconMode, Sample};
use crate::geometry::format_number;
use crate::rendering::{Align, Color, ImageSpec, LineStyle, RenderBackend, TextSpec, VAlign};

use super::ChartView;

/// Glyph diameter for dot samples.
const SAMPLE_SIZE: f64 = 5.0;
/// Decimals shown on the corner value labels.
const LABEL_DECIMALS: usize = 2;

pub(crate) fn draw_chart(view: &ChartView, backend: &mut dyn RenderBackend) {
    backend.clear();

    backend.set_alpha(view.options.transparency);
    for sample in &view.samples {
        draw_sample(view, backend, sample);
    }
    backend.set_alpha(1.0);

    if let Some(index) = view.hovered {
        draw_emphasis(view, backend, &view.samples[index], view.theme.hover_emphasis);
    }
    if let Some(index) = view.selected {
        draw_emphasis(
            view,
            backend,
            &view.samples[index],
            view.theme.selection_emphasis,
        );
    }

    draw_axes(view, backend);
}

fn pixel_loc(view: &ChartView, sample: &Sample) -> DVec2 {
    view.data_bounds
        .remap_point(&view.pixel_bounds, sample.point)
}

fn draw_sample(view: &ChartView, backend: &mut dyn RenderBackend, sample: &Sample) {
    let loc = pixel_loc(view, sample);
    let style = view.options.styles.resolve(&sample.label);
    match view.options.icon {
        IconMode::Point => backend.draw_point(loc, style.color, SAMPLE_SIZE),
        IconMode::Text => {
            let text = style
                .text
                .clone()
                .unwrap_or_else(|| sample.label.clone());
            backend.draw_text(TextSpec::new(text, loc, view.margin * 0.3).color(style.color));
        }
        IconMode::Image => match &style.image {
            Some(source) => backend.draw_image(ImageSpec {
                source: source.clone(),
                loc,
            }),
            // Missing icon degrades to a dot rather than failing the pass
            None => backend.draw_point(loc, style.color, SAMPLE_SIZE),
        },
    }
}

/// Radial halo under the sample, then the sample redrawn at full opacity.
fn draw_emphasis(view: &ChartView, backend: &mut dyn RenderBackend, sample: &Sample, color: Color) {
    let loc = pixel_loc(view, sample);
    backend.draw_halo(loc, view.margin, color);
    draw_sample(view, backend, sample);
}

fn draw_axes(view: &ChartView, backend: &mut dyn RenderBackend) {
    let size = view.options.size;
    let margin = view.margin;
    let bounds = view.pixel_bounds;
    let theme = &view.theme;

    // Mask the margin strips so edge samples don't bleed under the labels
    backend.clear_rect(DVec2::ZERO, DVec2::new(size, margin));
    backend.clear_rect(DVec2::ZERO, DVec2::new(margin, size));
    backend.clear_rect(DVec2::new(size - margin, 0.0), DVec2::new(margin, size));
    backend.clear_rect(DVec2::new(0.0, size - margin), DVec2::new(size, margin));

    let [x_label, y_label] = &view.options.axes_labels;
    backend.draw_text(
        TextSpec::new(
            x_label.clone(),
            DVec2::new(size / 2.0, bounds.bottom + margin / 2.0),
            margin * 0.6,
        )
        .color(theme.axis_label),
    );
    backend.draw_text(
        TextSpec::new(
            y_label.clone(),
            DVec2::new(bounds.left - margin / 2.0, size / 2.0),
            margin * 0.6,
        )
        .color(theme.axis_label)
        .angle(-FRAC_PI_2),
    );

    // Dashed L-shaped guide along the left and bottom plot edges
    let guide = [
        DVec2::new(bounds.left, bounds.top),
        DVec2::new(bounds.left, bounds.bottom),
        DVec2::new(bounds.right, bounds.bottom),
    ];
    backend.draw_polyline(
        &guide,
        LineStyle {
            width: theme.axis_line_width,
            color: theme.axis_line,
            dash: Some(theme.axis_dash),
        },
    );

    // Corner values come from the *active* bounds so the displayed range
    // tracks the current zoom/pan: (left, bottom) carries the minima,
    // (right, top) the maxima.
    let data_min = view
        .pixel_bounds
        .remap_point(&view.data_bounds, DVec2::new(bounds.left, bounds.bottom));
    let data_max = view
        .pixel_bounds
        .remap_point(&view.data_bounds, DVec2::new(bounds.right, bounds.top));

    backend.draw_text(
        TextSpec::new(
            format_number(data_min.x, LABEL_DECIMALS),
            DVec2::new(bounds.left, bounds.bottom),
            margin * 0.3,
        )
        .color(theme.axis_label)
        .align(Align::Left)
        .v_align(VAlign::Top),
    );
    backend.draw_text(
        TextSpec::new(
            format_number(data_min.y, LABEL_DECIMALS),
            DVec2::new(bounds.left, bounds.bottom),
            margin * 0.3,
        )
        .color(theme.axis_label)
        .align(Align::Left)
        .v_align(VAlign::Bottom)
        .angle(-FRAC_PI_2),
    );
    backend.draw_text(
        TextSpec::new(
            format_number(data_max.x, LABEL_DECIMALS),
            DVec2::new(bounds.right, bounds.bottom),
            margin * 0.3,
        )
        .color(theme.axis_label)
        .align(Align::Right)
        .v_align(VAlign::Top),
    );
    backend.draw_text(
        TextSpec::new(
            format_number(data_max.y, LABEL_DECIMALS),
            DVec2::new(bounds.left, bounds.top),
            margin * 0.3,
        )
        .color(theme.axis_label)
        .align(Align::Right)
        .v_align(VAlign::Bottom)
        .angle(-FRAC_PI_2),
    );
}
