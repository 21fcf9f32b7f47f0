//! Exercise reference data.
//!
//! Exercises are the catalog entries templates are built from. They are
//! seeded once and replaced wholesale on updates; there is no per-id
//! mutation path for them.

use serde::{Deserialize, Serialize};

/// A single exercise in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub category: String,
    pub muscle_groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
}

impl Exercise {
    /// Comma-separated muscle group list for display.
    pub fn muscle_groups_display(&self) -> String {
        self.muscle_groups.join(", ")
    }

    pub fn needs_equipment(&self) -> bool {
        match self.equipment.as_deref() {
            None | Some("") | Some("None") => false,
            Some(_) => true,
        }
    }
}
