#![warn(missing_docs)]

//! Scormlens Manifest Models
//!
//! Typed, fully-optional object models for the manifest formats scormlens
//! understands: SCORM 2004 (including the sequencing and rollup data model),
//! SCORM 1.2, AICC course structures, cmi5 course structures, and xAPI
//! (TinCan) activity lists. Every nested element is modelled as `Option` or
//! `Vec` so that a partially-populated document never panics a consumer.

pub mod aicc;
pub mod cmi5;
pub mod error;
pub mod parsers;
pub mod scorm12;
pub mod scorm2004;
pub mod tincan;

pub use aicc::*;
pub use cmi5::*;
pub use error::*;
pub use parsers::{JsonParser, YamlParser};
pub use scorm12::*;
pub use scorm2004::*;
pub use tincan::*;
