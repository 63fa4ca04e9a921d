//! UI Components for the pulling program generator.
//!
//! # Layout Components
//! - [`Hero`] - Page title and description
//!
//! # Feature Components
//! - [`UploadForm`] - Datasheet picker and submit button
//! - [`ProgramTable`] - Generated program, one row per maneuver

mod hero;
mod upload;
mod program_table;

pub use hero::*;
pub use upload::*;
pub use program_table::*;
