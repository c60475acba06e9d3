//! Classifier API trait
//!
//! Contract trait for the classifier service.

use crate::error::ClassifierError;
use crate::models::{Classification, Hba1cInput};

/// HbA1c classifier API.
///
/// Implementations are stateless: every call is independent and may be
/// issued concurrently from any number of requests.
pub trait Hba1cClassifierApi: Send + Sync {
    /// Coerce a raw input value and classify it against the ADA cutoffs.
    ///
    /// # Errors
    /// Returns `ClassifierError::InvalidType` if the input cannot be read as a
    /// finite number, or `ClassifierError::Internal` on an unexpected failure.
    fn classify(&self, input: &Hba1cInput) -> Result<Classification, ClassifierError>;
}
