use thiserror::Error;

/// Errors from the pure nutrition calculations.
#[derive(Debug, Error, PartialEq)]
pub enum NutritionError {
    /// Rescaling needs a non-zero reference amount to derive per-gram ratios.
    #[error("item amount is 0g, per-gram ratios are undefined")]
    ZeroReferenceAmount,

    #[error("macro percentages must total 100% (got {total}%)")]
    SplitNotHundred { total: f64 },
}
