use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A single labeled data point.
///
/// Samples are immutable once created; identity is carried by `id` and
/// `label` selects the entry in the style table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub id: u64,
    pub label: String,
    pub point: DVec2,
}

impl Sample {
    pub fn new(id: u64, label: impl Into<String>, point: DVec2) -> Self {
        Self {
            id,
            label: label.into(),
            point,
        }
    }
}
