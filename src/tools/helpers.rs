//! Provides some helper functions.
use fixedbitset::FixedBitSet;


/// Maps a real-valued score to a label.
/// A score of exactly zero is mapped to `+1`,
/// the label every stump starts from.
#[inline(always)]
pub fn sign(score: f64) -> i64 {
    if score >= 0f64 { 1 } else { -1 }
}


/// Returns the set of rows where `predictions` disagree with `target`.
///
/// Time complexity: `O(m)`, where `m` is the number of training examples.
#[inline(always)]
pub fn mistakes<I>(predictions: I, target: &[f64]) -> FixedBitSet
    where I: IntoIterator<Item = i64>,
{
    let mut bits = FixedBitSet::with_capacity(target.len());
    predictions.into_iter()
        .zip(target)
        .enumerate()
        .for_each(|(i, (p, &y))| {
            if p as f64 != y { bits.insert(i); }
        });
    bits
}


/// Returns the weighted training error,
/// i.e., the sum of `dist[i]` over the mistaken rows `i`.
/// The rows are summed in ascending order,
/// so the result does not depend on how `mistakes` was built.
#[inline(always)]
pub fn weighted_error(mistakes: &FixedBitSet, dist: &[f64]) -> f64 {
    mistakes.ones()
        .map(|i| dist[i])
        .fold(0f64, |acc, d| acc + d)
}


/// Returns the fraction of mistaken rows.
#[inline(always)]
pub fn error_rate(mistakes: &FixedBitSet) -> f64 {
    let n_sample = mistakes.len();
    if n_sample == 0 { return 0f64; }
    mistakes.count_ones(..) as f64 / n_sample as f64
}


/// Returns the margins `y[i] * p[i]` of the given predictions.
#[inline(always)]
pub fn margins<'a>(predictions: &'a [i64], target: &'a [f64])
    -> impl Iterator<Item = f64> + 'a
{
    target.iter()
        .zip(predictions)
        .map(|(y, &p)| y * p as f64)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_01() {
        assert_eq!(sign(0.3), 1);
        assert_eq!(sign(-0.3), -1);
    }

    #[test]
    fn test_sign_zero() {
        assert_eq!(sign(0f64), 1);
        assert_eq!(sign(-0f64), 1);
    }

    #[test]
    fn test_mistakes_01() {
        let predictions = vec![1, -1, 1, 1];
        let target = [1.0, 1.0, -1.0, 1.0];
        let bits = mistakes(predictions, &target);
        let result = bits.ones().collect::<Vec<_>>();
        assert_eq!(result, vec![1, 2]);
    }

    #[test]
    fn test_weighted_error_01() {
        let target = [1.0, 1.0, -1.0, 1.0];
        let dist = [0.1, 0.2, 0.3, 0.4];
        let bits = mistakes(vec![1, -1, 1, 1], &target);
        let result = weighted_error(&bits, &dist);
        let expect = 0.2 + 0.3;
        assert_eq!(expect, result, "expected {expect}, got {result}.");
    }

    #[test]
    fn test_weighted_error_none() {
        let target = [1.0, -1.0];
        let bits = mistakes(vec![1, -1], &target);
        assert_eq!(weighted_error(&bits, &[0.5, 0.5]), 0f64);
    }

    #[test]
    fn test_error_rate_01() {
        let target = [1.0, 1.0, -1.0, 1.0];
        let bits = mistakes(vec![-1, 1, 1, 1], &target);
        assert_eq!(error_rate(&bits), 0.5);
    }

    #[test]
    fn test_margins_01() {
        let result = margins(&[1, -1, -1], &[1.0, 1.0, -1.0])
            .collect::<Vec<_>>();
        assert_eq!(result, vec![1.0, -1.0, 1.0]);
    }
}
