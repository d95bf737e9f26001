//! Analytics scenario catalog models.
//!
//! The catalog is owned by the remote analytics service and mirrored here
//! read-only for selection purposes. Entry order is display order; ids are
//! unique within one snapshot but not guaranteed stable across snapshots.

use serde::{Deserialize, Serialize};

/// One entry of the analytics scenario catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioEntry {
    pub id: i64,
    pub name: String,

    /// Scenario kind as reported by the analytics service, e.g.
    /// `motionDetection`. Wire field name is `type`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl ScenarioEntry {
    /// Human-readable kind: camelCase split on word boundaries, lowercased.
    /// `motionDetection` becomes `motion detection`.
    pub fn kind_label(&self) -> String {
        let mut label = String::with_capacity(self.kind.len() + 4);
        for ch in self.kind.chars() {
            if ch.is_ascii_uppercase() {
                if !label.is_empty() {
                    label.push(' ');
                }
                label.push(ch.to_ascii_lowercase());
            } else {
                label.push(ch);
            }
        }
        label
    }

    /// Label used in the selection list, e.g. `Zone A (ID: 3)`.
    pub fn selection_label(&self) -> String {
        format!("{} (ID: {})", self.name, self.id)
    }
}
