//! Error types and context management for word cloud generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all word cloud operations
#[derive(Debug)]
pub enum CloudError {
    /// Source text could not be read from the filesystem
    InputNotFound {
        /// Path to the text file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// No tokens survived exclusion filtering
    ///
    /// This is an expected outcome for empty or stop-word-only documents,
    /// callers should report it rather than treat it as a crash.
    EmptyVocabulary {
        /// Number of entries in the exclusion set that was applied
        excluded: usize,
    },

    /// A word exhausted its placement budget
    ///
    /// Only raised when the layout runs with an aborting overflow policy.
    PlacementStalled {
        /// Normalized text of the word that could not be placed
        word: String,
        /// Total jitter attempts spent on the word
        attempts: usize,
    },

    /// Failed to encode or write the rendered image
    EncodeFailure {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// No usable font could be loaded
    FontLoad {
        /// Font family name or font file path
        font: String,
        /// Description of the failure
        reason: String,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Numerical or measurement computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for CloudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputNotFound { path, source } => {
                write!(
                    f,
                    "{} was not found or could not be read: {source}",
                    path.display()
                )
            }
            Self::EmptyVocabulary { excluded } => {
                write!(
                    f,
                    "No words were found after excluding {excluded} stop words"
                )
            }
            Self::PlacementStalled { word, attempts } => {
                write!(
                    f,
                    "Could not place '{word}' after {attempts} attempts (canvas too small?)"
                )
            }
            Self::EncodeFailure { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FontLoad { font, reason } => {
                write!(f, "Failed to load font '{font}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for CloudError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputNotFound { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::EncodeFailure { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl CloudError {
    /// Whether the error is an expected, non-fatal outcome for a single document
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::EmptyVocabulary { .. })
    }
}

/// Convenience type alias for word cloud results
pub type Result<T> = std::result::Result<T, CloudError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CloudError {
    CloudError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> CloudError {
    CloudError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
