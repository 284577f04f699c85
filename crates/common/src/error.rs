//! Error types

use thiserror::Error;

use crate::models::Category;

/// Main error type for Respira+
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown {} type: {activity}", .category.activity_label())]
    UnknownActivityType { category: Category, activity: String },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid quantity: {0} (must be a finite, non-negative number)")]
    InvalidQuantity(f64),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
