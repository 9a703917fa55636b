//! Error type for every fallible operation of this crate.
use thiserror::Error;

/// Errors reported while building samples, boosting, or writing metrics.
#[derive(Debug, Error)]
pub enum BoostError {
    /// The sample has no examples.
    #[error("the sample has no examples")]
    EmptySample,

    /// The sample has examples but no feature.
    #[error("the sample has no features")]
    NoFeature,

    /// Two lengths that must agree do not.
    #[error("shape mismatch on {what}: expected {expected}, got {got}")]
    ShapeMismatch {
        /// What was being compared.
        what: &'static str,
        /// The length implied by the rest of the input.
        expected: usize,
        /// The offending length.
        got: usize,
    },

    /// A label is not `-1` or `+1`.
    #[error("label at row {row} must be -1 or +1, got {label}")]
    InvalidLabel {
        /// Row of the label.
        row: usize,
        /// The label as read.
        label: f64,
    },

    /// A feature value is `NaN` or infinite.
    #[error("feature {feature} at row {row} is not finite (got {value})")]
    NonFiniteFeature {
        /// Row of the value.
        row: usize,
        /// Column of the value.
        feature: usize,
        /// The value itself.
        value: f64,
    },

    /// A sample weight became `NaN` or infinite after an update.
    #[error("weight of example {row} became {value} in round {round}")]
    NonFiniteWeight {
        /// Boosting round (0-based) whose update produced the value.
        round: usize,
        /// Example whose weight broke.
        row: usize,
        /// The weight after the update.
        value: f64,
    },

    /// A configuration parameter is out of range.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A file path required by a reader was never set.
    #[error("the {0} file is not set")]
    MissingFile(&'static str),

    /// A token in a delimited file is not a number.
    #[error("failed to parse {token:?} at line {line}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// Reading or writing failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Shorthand for results carrying a [`BoostError`].
pub type Result<T> = std::result::Result<T, BoostError>;
