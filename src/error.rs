//! Error types for the colormatch library

use thiserror::Error;

/// Result type alias for colormatch operations
pub type Result<T> = std::result::Result<T, MatchError>;

/// Error types for color extraction and product matching
///
/// An image that yields no colors and a catalog that yields no matches are
/// valid empty results, not errors. Errors are reserved for inputs that
/// could not be processed at all.
#[derive(Error, Debug)]
pub enum MatchError {
    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Product catalog could not be loaded or parsed
    #[error("Catalog error: {message}")]
    Catalog {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generic processing error
    #[error("Processing error: {message}")]
    Processing { message: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// A newer extraction request replaced this one before it finished
    #[error("Request superseded by a newer submission")]
    Superseded,
}

impl MatchError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a catalog error with context
    pub fn catalog<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Catalog {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a catalog error without an underlying source
    pub fn catalog_message(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
            source: None,
        }
    }

    /// Create a generic processing error
    pub fn processing(message: impl Into<String>) -> Self {
        Self::Processing {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error indicates a recoverable condition
    pub fn is_recoverable(&self) -> bool {
        matches!(self, MatchError::ImageLoad { .. } | MatchError::Superseded)
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            MatchError::ImageLoad { .. } => {
                "Could not process the image. Please try another one.".to_string()
            }
            MatchError::Catalog { .. } => {
                "Product catalog is unavailable right now. Please try again later.".to_string()
            }
            MatchError::Superseded => {
                "A newer photo was submitted; this request was discarded.".to_string()
            }
            _ => "Color matching failed. Please try with a different image.".to_string(),
        }
    }
}
