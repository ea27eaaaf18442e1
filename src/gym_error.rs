use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeightError {
    #[error("Weight must not be negative ({0} < 0)")]
    Negative(f64),
    #[error("Weight must be a finite number")]
    NotFinite,
    #[error("Weight must be {max} or less ({0} > {max})", max = crate::weight::Weight::MAX_UNITS)]
    TooLarge(f64),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InventoryError {
    #[error("Invalid weight for {field}: {source}")]
    InvalidWeight { field: String, source: WeightError },
    #[error("Count for {field} must not be negative ({count} < 0)")]
    NegativeCount { field: String, count: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequirementError {
    #[error("Requirement must not be empty")]
    Empty,
    #[error("Invalid weight \"{0}\"")]
    InvalidWeight(String),
    #[error(transparent)]
    Weight(#[from] WeightError),
    #[error("Unknown equipment suffix \"{0}\" (expected one of b, d, k, r, c, l, p, h)")]
    UnknownCategory(String),
}
