use serde::{Deserialize, Serialize};

use crate::data_types::{IconMode, StyleTable};

/// Chart construction options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Square surface dimension in pixels.
    pub size: f64,
    /// X and Y axis titles.
    pub axes_labels: [String; 2],
    pub styles: StyleTable,
    pub icon: IconMode,
    /// Lower zoom clamp; smaller scale means a tighter visible data range.
    pub min_scale: f64,
    /// Upper zoom clamp.
    pub max_scale: f64,
    /// Scale change per wheel notch.
    pub wheel_step: f64,
    /// Global alpha used for the base sample pass.
    pub transparency: f64,
}

impl ChartOptions {
    /// Load options (including the style table) from JSON configuration.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Margin reserved for axes on every edge.
    pub fn margin(&self) -> f64 {
        self.size * 0.1
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            size: 400.0,
            axes_labels: [String::from("X"), String::from("Y")],
            styles: StyleTable::default(),
            icon: IconMode::default(),
            min_scale: 0.02,
            max_scale: 2.0,
            wheel_step: 0.02,
            transparency: 0.7,
        }
    }
}
