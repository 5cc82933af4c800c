use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::rendering::Color;

/// How each sample is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconMode {
    /// Filled circle colored by the sample's style.
    #[default]
    Point,
    /// Style-provided icon image.
    Image,
    /// Style-provided label string.
    Text,
}

/// Visual style for one sample label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleStyle {
    pub color: Color,
    /// Glyph string for [`IconMode::Text`]; the sample label is used when absent.
    pub text: Option<String>,
    /// Backend-resolved image source for [`IconMode::Image`].
    pub image: Option<String>,
}

impl SampleStyle {
    pub fn color(color: Color) -> Self {
        Self {
            color,
            text: None,
            image: None,
        }
    }
}

impl Default for SampleStyle {
    fn default() -> Self {
        Self::color(Color::GRAY)
    }
}

/// Label → style mapping with a fallback for unknown labels.
///
/// A sample whose label has no entry renders with the fallback style rather
/// than failing the draw pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleTable {
    styles: HashMap<String, SampleStyle>,
    fallback: SampleStyle,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, label: impl Into<String>, style: SampleStyle) -> Self {
        self.styles.insert(label.into(), style);
        self
    }

    pub fn insert(&mut self, label: impl Into<String>, style: SampleStyle) {
        self.styles.insert(label.into(), style);
    }

    pub fn set_fallback(&mut self, style: SampleStyle) {
        self.fallback = style;
    }

    pub fn resolve(&self, label: &str) -> &SampleStyle {
        self.styles.get(label).unwrap_or(&self.fallback)
    }
}
