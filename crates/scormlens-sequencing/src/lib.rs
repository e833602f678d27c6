#![warn(missing_docs)]

//! Scormlens Sequencing Core
//!
//! Builds the activity tree from a SCORM 2004 manifest, resolves effective
//! delivery controls through the sequencing collection, collects global
//! objective mappings, classifies how extensively a package uses
//! sequencing, and assembles the resulting read-only metadata record.
//!
//! Everything here is a pure in-memory traversal over an already-parsed,
//! immutable manifest: no IO, no shared state, and a missing structure is
//! an absent result rather than an error.

pub mod metadata;
pub mod resolution;
pub mod tree;
pub mod usage;

pub use metadata::SequencingMetadata;
pub use resolution::{ResolvedDeliveryControls, SequencingResolution, SequencingResolver};
pub use tree::{ActivityNode, ActivityTree};
pub use usage::{SequencingIndicator, SequencingLevel, SequencingUsage, SequencingUsageDetector};
