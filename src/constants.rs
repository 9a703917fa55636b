//! Numerical constants and defaults shared by the booster and its tools.

/// Lower clamp applied to the weighted error inside the vote-weight and
/// normalizer formulas of [`AdaBoost`](crate::AdaBoost).
///
/// Without it, a stump with zero weighted error yields an infinite vote
/// weight. With it the vote weight is bounded by `ln(1/ε) / 2 ≈ 18.42`.
/// The clamp never touches the weighted error that is recorded or compared.
pub const STABILITY_EPSILON: f64 = 1e-16;

/// Number of boosting rounds used when none is configured.
pub const DEFAULT_ROUNDS: usize = 500;

/// Default delimiter for [`SampleReader`](crate::SampleReader).
pub const DEFAULT_DELIMITER: char = ',';
