use glam::DVec2;
use scatterplot::rendering::{RenderCommand, RenderList};
use scatterplot::{ChartOptions, ChartView, Color, IconMode, Sample, SampleStyle, StyleTable};

fn samples() -> Vec<Sample> {
    vec![
        Sample::new(1, "basic", DVec2::new(0.0, 0.0)),
        Sample::new(2, "sport", DVec2::new(10.0, 5.0)),
        Sample::new(3, "basic", DVec2::new(-3.0, 8.0)),
    ]
}

fn options() -> ChartOptions {
    ChartOptions {
        styles: StyleTable::new()
            .with_style("basic", SampleStyle::color(Color::BLUE))
            .with_style("sport", SampleStyle::color(Color::RED)),
        ..ChartOptions::default()
    }
}

fn rendered(chart: &ChartView) -> Vec<RenderCommand> {
    let mut list = RenderList::new();
    chart.draw(&mut list);
    list.take()
}

#[test]
fn test_pass_starts_with_clear_and_alpha_bracket() {
    let chart = ChartView::new(samples(), options()).unwrap();
    let commands = rendered(&chart);

    assert_eq!(commands[0], RenderCommand::Clear);
    assert!(matches!(commands[1], RenderCommand::SetAlpha(a) if (a - 0.7).abs() < 1e-12));
    // One dot per sample, then full opacity restored
    assert!(matches!(commands[2], RenderCommand::Point { .. }));
    assert!(matches!(commands[3], RenderCommand::Point { .. }));
    assert!(matches!(commands[4], RenderCommand::Point { .. }));
    assert!(matches!(commands[5], RenderCommand::SetAlpha(a) if a == 1.0));
}

#[test]
fn test_no_emphasis_without_hover_or_selection() {
    let chart = ChartView::new(samples(), options()).unwrap();
    let halos = rendered(&chart)
        .iter()
        .filter(|c| matches!(c, RenderCommand::Halo { .. }))
        .count();
    assert_eq!(halos, 0);
}

#[test]
fn test_selection_halo_drawn_after_hover_halo() {
    let mut chart = ChartView::new(samples(), options()).unwrap();
    chart.pointer_move(DVec2::new(40.0, 40.0));
    chart.pointer_down(DVec2::new(40.0, 40.0));
    chart.pointer_up(DVec2::new(40.0, 40.0));
    chart.click(DVec2::new(40.0, 40.0));

    let commands = rendered(&chart);
    let halos: Vec<(usize, Color)> = commands
        .iter()
        .enumerate()
        .filter_map(|(i, c)| match c {
            RenderCommand::Halo { color, .. } => Some((i, *color)),
            _ => None,
        })
        .collect();

    assert_eq!(halos.len(), 2);
    assert_eq!(halos[0].1, Color::WHITE);
    assert_eq!(halos[1].1, Color::YELLOW);
    assert!(halos[0].0 < halos[1].0);
}

#[test]
fn test_halo_radius_is_one_margin() {
    let mut chart = ChartView::new(samples(), options()).unwrap();
    chart.pointer_move(DVec2::new(40.0, 40.0));

    let commands = rendered(&chart);
    let radius = commands
        .iter()
        .find_map(|c| match c {
            RenderCommand::Halo { radius, .. } => Some(*radius),
            _ => None,
        })
        .expect("hovered sample draws a halo");
    assert_eq!(radius, chart.margin());
}

#[test]
fn test_axes_clear_all_four_margin_strips() {
    let chart = ChartView::new(samples(), options()).unwrap();
    let strips = rendered(&chart)
        .iter()
        .filter(|c| matches!(c, RenderCommand::ClearRect { .. }))
        .count();
    assert_eq!(strips, 4);
}

#[test]
fn test_corner_labels_show_default_range() {
    let chart = ChartView::new(samples(), options()).unwrap();
    let texts: Vec<String> = rendered(&chart)
        .iter()
        .filter_map(|c| match c {
            RenderCommand::Text(spec) => Some(spec.text.clone()),
            _ => None,
        })
        .collect();

    for expected in ["-3.00", "10.00", "0.00", "8.00"] {
        assert!(
            texts.iter().any(|t| t == expected),
            "missing corner label {expected} in {texts:?}"
        );
    }
}

#[test]
fn test_corner_labels_track_zoomed_bounds() {
    let mut chart = ChartView::new(samples(), options()).unwrap();
    for _ in 0..5 {
        chart.wheel(1.0);
    }
    let active = chart.data_bounds();
    let texts: Vec<String> = rendered(&chart)
        .iter()
        .filter_map(|c| match c {
            RenderCommand::Text(spec) => Some(spec.text.clone()),
            _ => None,
        })
        .collect();

    for expected in [
        format!("{:.2}", active.left),
        format!("{:.2}", active.right),
        format!("{:.2}", active.bottom),
        format!("{:.2}", active.top),
    ] {
        assert!(
            texts.iter().any(|t| *t == expected),
            "missing corner label {expected} in {texts:?}"
        );
    }
}

#[test]
fn test_unknown_label_renders_with_fallback_style() {
    let chart = ChartView::new(
        vec![
            Sample::new(1, "mystery", DVec2::new(0.0, 0.0)),
            Sample::new(2, "mystery", DVec2::new(1.0, 1.0)),
        ],
        ChartOptions::default(),
    )
    .unwrap();

    let commands = rendered(&chart);
    let dot_color = commands
        .iter()
        .find_map(|c| match c {
            RenderCommand::Point { color, .. } => Some(*color),
            _ => None,
        })
        .expect("samples still draw");
    assert_eq!(dot_color, Color::GRAY);
}

#[test]
fn test_text_icon_mode_draws_style_glyphs() {
    let chart = ChartView::new(
        samples(),
        ChartOptions {
            icon: IconMode::Text,
            styles: StyleTable::new().with_style(
                "basic",
                SampleStyle {
                    color: Color::BLUE,
                    text: Some(String::from("B")),
                    image: None,
                },
            ),
            ..ChartOptions::default()
        },
    )
    .unwrap();

    let texts: Vec<String> = rendered(&chart)
        .iter()
        .filter_map(|c| match c {
            RenderCommand::Text(spec) => Some(spec.text.clone()),
            _ => None,
        })
        .collect();

    // Two "basic" samples use the style glyph, the unstyled "sport" sample
    // falls back to its label text
    assert_eq!(texts.iter().filter(|t| *t == "B").count(), 2);
    assert_eq!(texts.iter().filter(|t| *t == "sport").count(), 1);
}

#[test]
fn test_image_icon_without_source_degrades_to_dot() {
    let chart = ChartView::new(
        samples(),
        ChartOptions {
            icon: IconMode::Image,
            styles: StyleTable::new().with_style(
                "sport",
                SampleStyle {
                    color: Color::RED,
                    text: None,
                    image: Some(String::from("icons/sport.png")),
                },
            ),
            ..ChartOptions::default()
        },
    )
    .unwrap();

    let commands = rendered(&chart);
    let images = commands
        .iter()
        .filter(|c| matches!(c, RenderCommand::Image(_)))
        .count();
    let dots = commands
        .iter()
        .filter(|c| matches!(c, RenderCommand::Point { .. }))
        .count();
    assert_eq!(images, 1);
    assert_eq!(dots, 2);
}
