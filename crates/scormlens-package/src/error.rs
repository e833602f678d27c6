//! Error types for package file access

use std::io;

use thiserror::Error;

/// Result alias for package operations
pub type PackageResult<T> = Result<T, PackageError>;

/// Errors that can occur while accessing package files
#[derive(Debug, Error)]
pub enum PackageError {
    /// Requested file does not exist in the package
    #[error("File not found in package: {0}")]
    NotFound(String),

    /// Requested path escapes the package root
    #[error("Path escapes the package root: {0}")]
    OutsidePackage(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}
