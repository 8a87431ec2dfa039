use crate::domain::model::{Category, Unit};
use thiserror::Error;

/// Rejected request input. Messages list the valid options so callers can self-correct.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required parameter: {field}")]
    MissingField { field: String },

    #[error("Missing required parameters: {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("Invalid parameter. Must be one of: {}", list(&Category::ALL))]
    InvalidCategory { value: String },

    #[error("Invalid units for {category}. Must be one of: {}", list(.allowed))]
    InvalidUnit {
        category: Category,
        value: String,
        allowed: Vec<Unit>,
    },
}

fn list<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("non-finite input value {value}")]
    NonFiniteInput { value: f64 },

    #[error("{from} to {to} produced a non-finite result from {value}")]
    NonFiniteResult { value: f64, from: Unit, to: Unit },

    #[error("value is not a number: {raw}")]
    NonNumeric { raw: String },
}

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned an unreadable body: {0}")]
    Decode(String),
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("{} service error: {source}", .category.title())]
    Upstream {
        category: Category,
        #[source]
        source: GatewayError,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServiceError {
    pub fn upstream(category: Category, source: GatewayError) -> Self {
        ServiceError::Upstream { category, source }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ServiceError::Internal {
            message: message.into(),
        }
    }

    /// Message safe to hand back to an API caller. Internal detail never leaks.
    pub fn public_message(&self) -> String {
        match self {
            ServiceError::Validation(_)
            | ServiceError::Conversion(_)
            | ServiceError::Upstream { .. } => self.to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
