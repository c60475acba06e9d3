//! Domain service for the classifier
//!
//! Contains the core business logic: coercing a raw `hba1c` value into a
//! finite number and mapping it onto the ADA glycemic bands.

use hba1c_classifier_sdk::{
    Classification, ClassifierError, DIABETES_THRESHOLD, GlycemicStatus, Hba1cClassifierApi,
    Hba1cInput, PREDIABETES_THRESHOLD,
};
use tracing::debug;

/// Domain service that classifies HbA1c values.
///
/// Stateless; a single instance is shared by every request.
#[derive(Clone, Copy, Debug, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Coerce a raw input into a finite `f64`.
    ///
    /// Strings are trimmed before parsing. Booleans, arrays, objects and
    /// non-finite results are rejected.
    ///
    /// # Errors
    /// Returns `ClassifierError::InvalidType` when the value is not numeric.
    pub fn coerce(input: &Hba1cInput) -> Result<f64, ClassifierError> {
        let value = match input {
            Hba1cInput::Number(v) => *v,
            Hba1cInput::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| ClassifierError::InvalidType)?,
            Hba1cInput::Unsupported { kind } => {
                debug!(kind, "hba1c has a non-numeric JSON type");
                return Err(ClassifierError::InvalidType);
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ClassifierError::InvalidType)
        }
    }

    /// Map a value onto its glycemic band.
    ///
    /// Lower cutoffs are inclusive: 5.7 is prediabetes and 6.5 is diabetes.
    #[must_use]
    pub fn status_for(value: f64) -> GlycemicStatus {
        if value < PREDIABETES_THRESHOLD {
            GlycemicStatus::Normal
        } else if value < DIABETES_THRESHOLD {
            GlycemicStatus::Prediabetes
        } else {
            GlycemicStatus::Diabetes
        }
    }
}

impl Hba1cClassifierApi for Service {
    fn classify(&self, input: &Hba1cInput) -> Result<Classification, ClassifierError> {
        let hba1c = Self::coerce(input)?;
        let status = Self::status_for(hba1c);
        debug!(hba1c, %status, "classified hba1c value");
        Ok(Classification { hba1c, status })
    }
}
