//! Error types for icon resolution and grid compositing

use thiserror::Error;

/// Errors that can occur while turning a layout request into a grid
///
/// Both variants are expected, user-facing conditions. The HTTP boundary maps
/// them to client errors (400 and 404).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// No icon identifiers were supplied at all
    #[error("Missing \"i\" parameter")]
    MissingInput,

    /// Identifiers were supplied but none matched the catalog
    #[error("No valid icons found")]
    NoValidIcons,
}
