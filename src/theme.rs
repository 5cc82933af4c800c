use crate::rendering::Color;

#[derive(Clone, Debug)]
pub struct ChartTheme {
    pub background: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub hover_emphasis: Color,
    pub selection_emphasis: Color,
    /// On/off lengths of the dashed axis guide.
    pub axis_dash: (f64, f64),
    pub axis_line_width: f64,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            axis_line: Color::LIGHT_GRAY,
            axis_label: Color::BLACK,
            hover_emphasis: Color::WHITE,
            selection_emphasis: Color::YELLOW,
            axis_dash: (5.0, 4.0),
            axis_line_width: 2.0,
        }
    }
}
