// ABOUTME: Unified error types for formulation, aggregation, and matching operations
// ABOUTME: Maps every failure to a stable error code so callers can branch without string matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Expected business outcomes (no vendor can make a drink) are *not* errors; they are
//! modelled as values (see [`crate::matching::MatchOutcome`]). Errors are reserved for
//! safety violations, invalid quantities, and malformed reference data.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;
use crate::models::PurposeSlot;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Malformed caller input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Zero, negative or non-finite ingredient amount
    #[serde(rename = "INVALID_QUANTITY")]
    InvalidQuantity = 3001,

    // Safety constraints (4000-4999)
    /// Mandatory slot without an allergen-safe candidate
    #[serde(rename = "CONSTRAINT_VIOLATION")]
    ConstraintViolation = 4000,

    // Reference data (5000-5999)
    /// Dangling ingredient id in reference data
    #[serde(rename = "UNKNOWN_INGREDIENT")]
    UnknownIngredient = 5000,
    /// Reference table could not be parsed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 5001,

    // Configuration (6000-6999)
    /// Engine configuration failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6000,
    /// Tracing subscriber could not be installed
    #[serde(rename = "LOGGING_INIT_FAILED")]
    LoggingInitFailed = 6001,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidQuantity => "An ingredient amount must be positive and finite",
            Self::ConstraintViolation => {
                "No ingredient satisfies the profile's allergy and diet constraints"
            }
            Self::UnknownIngredient => "Reference data points at an ingredient that does not exist",
            Self::SerializationError => "Reference data could not be parsed",
            Self::ConfigInvalid => "Engine configuration is invalid",
            Self::LoggingInitFailed => "Logging could not be initialized",
        }
    }

    /// Whether the error was caused by caller-supplied data rather than engine state
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput | Self::InvalidQuantity | Self::ConstraintViolation
        )
    }
}

/// Errors produced by the formulation and matching engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// A mandatory purpose slot has no candidate compatible with the profile
    #[error("no safe candidate for mandatory slot {slot}: {reason}")]
    ConstraintViolation {
        /// Slot that could not be filled
        slot: PurposeSlot,
        /// Why every candidate was rejected
        reason: String,
    },

    /// Amount is zero, negative, NaN or infinite
    #[error("invalid quantity {amount} for ingredient '{ingredient}'")]
    InvalidQuantity {
        /// Ingredient id carrying the bad amount
        ingredient: String,
        /// Offending amount
        amount: f64,
    },

    /// Reference data names an ingredient id the catalog does not contain
    #[error("unknown ingredient id: {0}")]
    UnknownIngredient(String),

    /// Caller input is malformed (coordinates out of range, negative multipliers, ...)
    #[error("invalid input: {0}")]
    InvalidData(String),

    /// Configuration failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Global tracing subscriber could not be installed
    #[error("logging initialization failed: {0}")]
    Logging(String),

    /// Externalized reference table failed to deserialize
    #[error("failed to parse reference data: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EngineError {
    /// Stable error code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::ConstraintViolation { .. } => ErrorCode::ConstraintViolation,
            Self::InvalidQuantity { .. } => ErrorCode::InvalidQuantity,
            Self::UnknownIngredient(_) => ErrorCode::UnknownIngredient,
            Self::InvalidData(_) => ErrorCode::InvalidInput,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::Logging(_) => ErrorCode::LoggingInitFailed,
            Self::Serialization(_) => ErrorCode::SerializationError,
        }
    }

    /// Constraint violation for a slot
    pub fn constraint(slot: PurposeSlot, reason: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            slot,
            reason: reason.into(),
        }
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }

    /// Check an amount at an aggregation boundary
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuantity` if `amount` is not strictly positive and finite
    pub fn check_amount(ingredient: &str, amount: f64) -> EngineResult<f64> {
        if amount.is_finite() && amount > 0.0 {
            Ok(amount)
        } else {
            Err(Self::InvalidQuantity {
                ingredient: ingredient.to_owned(),
                amount,
            })
        }
    }
}

/// Result type alias for convenience
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = EngineError::constraint(PurposeSlot::Liquid, "all liquids excluded");
        assert_eq!(err.code(), ErrorCode::ConstraintViolation);
        assert!(err.code().is_client_error());
        assert!(err.to_string().contains("liquid"));

        let err = EngineError::UnknownIngredient("dragonfruit".into());
        assert_eq!(err.code(), ErrorCode::UnknownIngredient);
        assert!(!err.code().is_client_error());
    }

    #[test]
    fn test_check_amount() {
        assert!(EngineError::check_amount("banana", 120.0).is_ok());
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                EngineError::check_amount("banana", bad),
                Err(EngineError::InvalidQuantity { .. })
            ));
        }
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::ConstraintViolation).unwrap();
        assert_eq!(json, "\"CONSTRAINT_VIOLATION\"");
    }
}
