//! HbA1c Classifier Module Implementation
//!
//! The public API is defined in `hba1c-classifier-sdk` and re-exported here.
//! Mount [`router`] into any axum application to serve the classifier.

pub use hba1c_classifier_sdk::{
    Classification, ClassifierError, GlycemicStatus, Hba1cClassifierApi, Hba1cInput,
};

pub mod api;
pub mod domain;

pub use api::rest::routes::router;
pub use domain::service::Service;
