//! Domain layer for the classifier module
//!
//! Contains value coercion and the ADA classification rules.

pub mod service;

pub use service::Service;
