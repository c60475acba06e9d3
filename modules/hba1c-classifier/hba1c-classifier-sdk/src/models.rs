//! Public models for the classifier module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the classifier and its consumers.

use std::fmt;

/// Name of the request field carrying the lab value.
pub const FIELD_NAME: &str = "hba1c";

/// Lowest HbA1c percentage classified as prediabetes.
pub const PREDIABETES_THRESHOLD: f64 = 5.7;

/// Lowest HbA1c percentage classified as diabetes.
pub const DIABETES_THRESHOLD: f64 = 6.5;

/// Raw `hba1c` value as it arrived, before numeric coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Hba1cInput {
    /// A JSON number.
    Number(f64),
    /// A JSON string or a query parameter.
    Text(String),
    /// Any other JSON type; never coercible.
    Unsupported { kind: &'static str },
}

/// Glycemic status per ADA cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlycemicStatus {
    Normal,
    Prediabetes,
    Diabetes,
}

impl GlycemicStatus {
    /// Machine-readable status code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Prediabetes => "prediabetes",
            Self::Diabetes => "diabetes",
        }
    }

    /// Human-readable category label.
    #[must_use]
    pub const fn category(self) -> &'static str {
        match self {
            Self::Normal => "Normal (<5.7%)",
            Self::Prediabetes => "Prediabetes (5.7\u{2013}6.4%)",
            Self::Diabetes => "Diabetes (\u{2265}6.5%)",
        }
    }
}

impl fmt::Display for GlycemicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a single HbA1c value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub hba1c: f64,
    pub status: GlycemicStatus,
}

impl Classification {
    /// Category label for the status.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        self.status.category()
    }
}
