#![warn(missing_docs)]

//! Scormlens Package Access
//!
//! The file-access capability the surrounding parsers consume: read a file
//! by relative path, check existence, list a directory. Backends here are
//! a local directory and an in-memory map; the analysis core itself never
//! touches any of this, it operates purely on parsed object graphs.

pub mod detect;
pub mod error;
pub mod source;

pub use detect::{detect_module_type, ModuleType};
pub use error::{PackageError, PackageResult};
pub use source::{InMemorySource, LocalDirSource, PackageSource};
