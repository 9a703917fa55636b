use rayon::prelude::*;

use crate::{
    tools::helpers,
    Classifier,
    Sample,
};


/// The ensemble that [`AdaBoost`](crate::AdaBoost) builds:
/// an append-only sequence of `(weight, hypothesis)` pairs.
///
/// The score of an example is `Σ_t weights[t] * h_t(x)` and
/// the predicted label is its sign, where a score of exactly zero
/// is predicted as `+1`.
/// An empty ensemble scores every example as `0` and
/// thus predicts `+1` everywhere.
///
/// Entries cannot be modified or removed once pushed.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedMajority<H> {
    weights: Vec<f64>,
    hypotheses: Vec<H>,
}


impl<H> WeightedMajority<H> {
    /// Construct an empty ensemble.
    #[inline]
    pub fn new() -> Self {
        Self { weights: Vec::new(), hypotheses: Vec::new() }
    }


    /// Append a pair `(weight, hypothesis)` to the current ensemble.
    #[inline]
    pub fn push(&mut self, weight: f64, hypothesis: H) {
        self.weights.push(weight);
        self.hypotheses.push(hypothesis);
    }


    /// Returns the number of hypotheses.
    #[inline]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Returns `true` if no hypothesis has been pushed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// Weights on each hypothesis, in the order of insertion.
    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights[..]
    }


    /// Hypotheses, in the order of insertion.
    #[inline]
    pub fn hypotheses(&self) -> &[H] {
        &self.hypotheses[..]
    }


    /// Iterates over the `(weight, hypothesis)` pairs.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (f64, &H)> {
        self.weights.iter()
            .copied()
            .zip(&self.hypotheses[..])
    }


    /// Decompose the ensemble
    /// into the two vectors `Vec<f64>` and `Vec<H>`
    #[inline]
    pub fn decompose(self) -> (Vec<f64>, Vec<H>) {
        (self.weights, self.hypotheses)
    }
}


impl<H> Default for WeightedMajority<H> {
    fn default() -> Self {
        Self::new()
    }
}


impl<H> WeightedMajority<H>
    where H: Classifier + Sync,
{
    /// Returns the score vector `Σ_t weights[t] * h_t(sample)`.
    /// Each score is accumulated in the order of insertion.
    pub fn evaluate(&self, sample: &Sample) -> Vec<f64> {
        let n_sample = sample.shape().0;
        (0..n_sample).into_par_iter()
            .map(|row| self.confidence(sample, row))
            .collect()
    }


    /// Returns the fraction of examples in `sample`
    /// whose predicted label differs from the given one.
    pub fn check(&self, sample: &Sample) -> f64 {
        let predictions = self.predict_all(sample);
        let mistakes = helpers::mistakes(predictions, sample.target());
        helpers::error_rate(&mistakes)
    }
}


impl<H> Classifier for WeightedMajority<H>
    where H: Classifier + Sync,
{
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        self.iter()
            .map(|(w, h)| w * h.confidence(sample, row))
            .fold(0f64, |acc, wh| acc + wh)
    }


    fn confidence_all(&self, sample: &Sample) -> Vec<f64> {
        self.evaluate(sample)
    }
}
