use std::sync::Arc;

use axum::Json;
use axum::extract::Extension;
use hba1c_classifier_sdk::{ClassifierError, Hba1cClassifierApi};

use super::dto::ClassificationDto;
use super::error::ApiError;
use super::extract::ResolvedInput;

/// Classify the `hba1c` value carried by the request body or query string.
///
/// # Errors
/// Returns `ApiError` for a missing or non-numeric value and for any
/// unexpected classifier failure.
pub async fn classify(
    Extension(svc): Extension<Arc<dyn Hba1cClassifierApi>>,
    ResolvedInput(input): ResolvedInput,
) -> Result<Json<ClassificationDto>, ApiError> {
    let input = input.ok_or(ClassifierError::MissingField)?;
    let classification = svc.classify(&input)?;
    Ok(Json(classification.into()))
}
