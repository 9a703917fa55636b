//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::Sample;
use crate::error::{BoostError, Result};


/// Check whether the sample has at least one example and one feature.
#[inline(always)]
pub fn non_empty(n_sample: usize, n_feature: usize) -> Result<()> {
    if n_sample == 0 {
        return Err(BoostError::EmptySample);
    }
    if n_feature == 0 {
        return Err(BoostError::NoFeature);
    }
    Ok(())
}


/// Check whether `got` equals to `expected`.
#[inline(always)]
pub fn same_length(what: &'static str, expected: usize, got: usize)
    -> Result<()>
{
    if expected != got {
        return Err(BoostError::ShapeMismatch { what, expected, got });
    }
    Ok(())
}


/// Check whether every label is `-1` or `+1`.
#[inline(always)]
pub fn binary_labels(target: &[f64]) -> Result<()> {
    match target.iter().position(|&y| y != 1f64 && y != -1f64) {
        Some(row) => Err(BoostError::InvalidLabel { row, label: target[row] }),
        None => Ok(()),
    }
}


/// Check whether every feature value is finite.
/// Non-finite values have no place in the threshold order
/// the stump search relies on.
#[inline(always)]
pub fn finite_features(columns: &[Vec<f64>]) -> Result<()> {
    for (feature, column) in columns.iter().enumerate() {
        if let Some(row) = column.iter().position(|x| !x.is_finite()) {
            let value = column[row];
            return Err(BoostError::NonFiniteFeature { row, feature, value });
        }
    }
    Ok(())
}


/// Check whether the test sample lives in the same feature space
/// as the training sample.
#[inline(always)]
pub fn same_dimension(train: &Sample, test: &Sample) -> Result<()> {
    let (_, n_train) = train.shape();
    let (_, n_test) = test.shape();
    same_length("test feature dimension", n_train, n_test)
}


/// Check the weights after the update of round `round`.
#[inline(always)]
pub fn finite_weights(dist: &[f64], round: usize) -> Result<()> {
    match dist.iter().position(|d| !d.is_finite()) {
        Some(row) => Err(BoostError::NonFiniteWeight {
            round,
            row,
            value: dist[row],
        }),
        None => Ok(()),
    }
}


/// Check the stability constant. It must be a small positive number.
#[inline(always)]
pub fn stability_epsilon(epsilon: f64) -> Result<()> {
    if epsilon > 0f64 && epsilon < 0.5f64 {
        Ok(())
    } else {
        Err(BoostError::InvalidParameter { name: "epsilon", value: epsilon })
    }
}
