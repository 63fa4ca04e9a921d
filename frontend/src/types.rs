//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Program Types** - rows of the generated pulling program
//! - **File Types** - the user-selected datasheet

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// =============================================================================
// Program Types
// =============================================================================

/// One maneuver of the pulling program, as returned by `/process/`.
///
/// Every field is a display string. The backend builds rows from a dataframe,
/// so numbers, booleans and nulls are accepted and rendered as text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManeuverRecord {
    /// Normalized maneuver name
    #[serde(rename = "manobra_normalizada", default, deserialize_with = "display_string")]
    pub maneuver: String,
    /// Program point identifier
    #[serde(rename = "punto_programa", default, deserialize_with = "display_string")]
    pub program_point: String,
    /// Free-text description
    #[serde(rename = "descripcion", default, deserialize_with = "display_string")]
    pub description: String,
    #[serde(rename = "activity_phase", default, deserialize_with = "display_string")]
    pub phase: String,
    #[serde(rename = "activity_code", default, deserialize_with = "display_string")]
    pub code: String,
    #[serde(rename = "activity_subcode", default, deserialize_with = "display_string")]
    pub subcode: String,
}

impl ManeuverRecord {
    /// Cells in table column order.
    pub fn cells(&self) -> [&str; 6] {
        [
            self.maneuver.as_str(),
            self.program_point.as_str(),
            self.description.as_str(),
            self.phase.as_str(),
            self.code.as_str(),
            self.subcode.as_str(),
        ]
    }
}

fn display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

// =============================================================================
// File Types
// =============================================================================

/// A file picked by the user for upload.
///
/// Implemented for the browser's `File`; tests use in-memory stand-ins.
pub trait UploadFile: Clone + 'static {
    /// Name shown next to the file picker.
    fn display_name(&self) -> String;
}

impl UploadFile for web_sys::File {
    fn display_name(&self) -> String {
        self.name()
    }
}
