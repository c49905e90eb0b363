//! # Error Types
//!
//! Structured error types for pile_core. Each variant carries enough context
//! to understand and fix the problem programmatically: which field was bad,
//! which key was missing from which table, which depth had no measurement.
//!
//! ## Example
//!
//! ```rust
//! use pile_core::errors::{CalcError, CalcResult};
//!
//! fn validate_cota(cota_m: f64) -> CalcResult<()> {
//!     if cota_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "cota_assentamento",
//!             cota_m.to_string(),
//!             "Settlement depth must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for pile_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for pile capacity calculations.
///
/// Three failure families per the engine's contract: validation errors
/// (malformed entities), lookup errors (unknown methods, unsupported
/// coefficient keys, missing measurements), and configuration errors
/// (diameter-dependent factors requested without a diameter).
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong shape, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Free-form soil text did not match any canonical soil type
    #[error("Soil type not recognized: '{text}'")]
    SoilNotRecognized { text: String },

    /// Calculation method id not present in the registry
    #[error("Calculation method not found: '{method_id}'")]
    MethodNotFound { method_id: String },

    /// A coefficient table has no entry for the requested key
    #[error("Key not supported by {table}: '{key}'")]
    NotSupported { table: String, key: String },

    /// No measurement stored at the requested depth (exact-match retrieval)
    #[error("No measurement at depth {depth_m} m in sounding '{sounding}'")]
    MeasurementNotFound { depth_m: f64, sounding: String },

    /// Named cross-section not present in a pile catalog
    #[error("Profile '{profile_name}' not found in catalog '{catalog}'")]
    ProfileNotFound {
        catalog: String,
        profile_name: String,
    },

    /// A diameter-dependent coefficient was requested without a diameter
    #[error("Diameter required to resolve F1 for pile type '{pile_type}'")]
    DiameterRequired { pile_type: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SoilNotRecognized error
    pub fn soil_not_recognized(text: impl Into<String>) -> Self {
        CalcError::SoilNotRecognized { text: text.into() }
    }

    /// Create a MethodNotFound error
    pub fn method_not_found(method_id: impl Into<String>) -> Self {
        CalcError::MethodNotFound {
            method_id: method_id.into(),
        }
    }

    /// Create a NotSupported error naming the table and the missing key
    pub fn not_supported(table: impl Into<String>, key: impl Into<String>) -> Self {
        CalcError::NotSupported {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Create a MeasurementNotFound error
    pub fn measurement_not_found(depth_m: f64, sounding: impl Into<String>) -> Self {
        CalcError::MeasurementNotFound {
            depth_m,
            sounding: sounding.into(),
        }
    }

    /// Create a ProfileNotFound error
    pub fn profile_not_found(catalog: impl Into<String>, profile_name: impl Into<String>) -> Self {
        CalcError::ProfileNotFound {
            catalog: catalog.into(),
            profile_name: profile_name.into(),
        }
    }

    /// Create a DiameterRequired error
    pub fn diameter_required(pile_type: impl Into<String>) -> Self {
        CalcError::DiameterRequired {
            pile_type: pile_type.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::SoilNotRecognized { .. } => "SOIL_NOT_RECOGNIZED",
            CalcError::MethodNotFound { .. } => "METHOD_NOT_FOUND",
            CalcError::NotSupported { .. } => "NOT_SUPPORTED",
            CalcError::MeasurementNotFound { .. } => "MEASUREMENT_NOT_FOUND",
            CalcError::ProfileNotFound { .. } => "PROFILE_NOT_FOUND",
            CalcError::DiameterRequired { .. } => "DIAMETER_REQUIRED",
        }
    }

    /// True for the validation family (bad entity construction)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. } | CalcError::SoilNotRecognized { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("cota", "-5.0", "Depth must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::method_not_found("x").error_code(),
            "METHOD_NOT_FOUND"
        );
        assert_eq!(
            CalcError::diameter_required("pré-moldada").error_code(),
            "DIAMETER_REQUIRED"
        );
    }

    #[test]
    fn test_display_names_key() {
        let err = CalcError::not_supported("coef_k_aoki_velloso", "rocha");
        let msg = err.to_string();
        assert!(msg.contains("rocha"));
        assert!(msg.contains("coef_k_aoki_velloso"));
    }

    #[test]
    fn test_validation_family() {
        assert!(CalcError::soil_not_recognized("xyz").is_validation());
        assert!(!CalcError::method_not_found("m").is_validation());
    }
}
