//! Backend communication.
//!
//! # Services
//!
//! - [`upload`] - datasheet upload to the `/process/` endpoint

pub mod upload;

pub use upload::*;
