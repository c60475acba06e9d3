//! HbA1c Classifier SDK
//!
//! This crate provides the transport-agnostic contract of the classifier:
//! - API trait (`Hba1cClassifierApi`)
//! - Models (`Hba1cInput`, `Classification`, `GlycemicStatus`)
//! - Error type (`ClassifierError`)
//! - ADA cutoffs (`PREDIABETES_THRESHOLD`, `DIABETES_THRESHOLD`)

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

mod api;
pub use api::Hba1cClassifierApi;

pub mod error;
pub use error::ClassifierError;

pub mod models;
pub use models::{
    Classification, DIABETES_THRESHOLD, FIELD_NAME, GlycemicStatus, Hba1cInput,
    PREDIABETES_THRESHOLD,
};
