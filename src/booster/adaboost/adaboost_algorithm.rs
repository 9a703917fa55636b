//! Provides [`AdaBoost`](AdaBoost) by Freund & Schapire, 1995.
use rayon::prelude::*;


use crate::{
    Booster,
    WeakLearner,
    Classifier,
    WeightedMajority,
    Sample,

    constants::{DEFAULT_ROUNDS, STABILITY_EPSILON},
    error::Result,
    research::Research,
    tools::{checkers, helpers},
};
use crate::booster::RoundMetrics;

use super::AdaBoostConfig;

use std::ops::ControlFlow;


/// Defines `AdaBoost` with a fixed number of rounds.
/// This struct is based on the book:
/// [Boosting: Foundations and Algorithms](https://direct.mit.edu/books/oa-monograph/5342/BoostingFoundations-and-Algorithms)
/// by Robert E. Schapire and Yoav Freund.
///
/// In each round `t`, `AdaBoost`
/// 1. asks the weak learner for the stump `h_t`
///    minimizing the weighted error `err` on the current weights,
/// 2. sets `alpha = ln((1 - err) / max(err, ε)) / 2`,
/// 3. appends `(alpha, h_t)` to the ensemble,
/// 4. updates every weight as `w_i <- w_i * exp(-alpha * y_i * h_t(x_i)) / z`,
///    where `z = 2 * sqrt(max(err, ε) * (1 - err))`,
/// 5. records the training and test errors of the ensemble so far.
///
/// The weights start uniform and are not renormalized beyond `z`.
/// `ε` is used only in steps 2 and 4,
/// so a perfect stump gets a large but finite `alpha`.
///
/// # Example
/// ```
/// use stumpboost::prelude::*;
///
/// let rows = [[0.0], [1.0], [2.0], [3.0]];
/// let train = Sample::from_rows(&rows[..], vec![-1.0, -1.0, 1.0, 1.0])
///     .unwrap();
/// let test = train.clone();
///
/// let weak_learner = DStump::init(&train);
/// let mut booster = AdaBoost::init(&train, &test)
///     .rounds(3);
///
/// let f = booster.run(&weak_learner).unwrap();
/// assert_eq!(f.len(), 3);
/// assert_eq!(f.predict_all(&test), vec![-1, -1, 1, 1]);
///
/// let metrics = booster.metrics();
/// assert_eq!(metrics.len(), 3);
/// assert_eq!(metrics[0].weighted_error, 0.0);
/// assert_eq!(metrics[0].train_error, 0.0);
/// ```
pub struct AdaBoost<'a, H> {
    // Training sample
    train: &'a Sample,

    // Test sample. Only used for the reported errors.
    test: &'a Sample,

    // Weights on the training examples.
    dist: Vec<f64>,

    // Number of rounds.
    rounds: usize,

    // Stability constant used in `alpha` and `z`.
    epsilon: f64,

    // The ensemble built so far.
    ensemble: WeightedMajority<H>,

    // Scores of the ensemble on each sample, kept in sync with `ensemble`.
    train_scores: Vec<f64>,
    test_scores: Vec<f64>,

    // `metrics[t]` is recorded at the end of round `t`.
    metrics: Vec<RoundMetrics>,
}


impl<'a, H> AdaBoost<'a, H> {
    /// Initialize the `AdaBoost`.
    /// The number of rounds defaults to `500` and
    /// the stability constant to [`STABILITY_EPSILON`].
    pub fn init(train: &'a Sample, test: &'a Sample) -> Self {
        let n_sample = train.shape().0;
        let uni = 1f64 / n_sample as f64;

        Self {
            train,
            test,

            dist: vec![uni; n_sample],
            rounds: DEFAULT_ROUNDS,
            epsilon: STABILITY_EPSILON,

            ensemble: WeightedMajority::new(),
            train_scores: Vec::new(),
            test_scores: Vec::new(),
            metrics: Vec::new(),
        }
    }


    /// Initialize the `AdaBoost` with the parameters in `config`.
    pub fn from_config(
        train: &'a Sample,
        test: &'a Sample,
        config: AdaBoostConfig,
    ) -> Self
    {
        Self::init(train, test)
            .rounds(config.rounds)
            .epsilon(config.epsilon)
    }


    /// Set the number of rounds.
    /// `rounds(0)` yields the empty ensemble.
    pub fn rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }


    /// Set the stability constant `ε`.
    /// It must lie in `(0, 1/2)`; this is checked when the run starts.
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }


    /// Returns the current weights on the training examples.
    #[inline]
    pub fn distribution(&self) -> &[f64] {
        &self.dist[..]
    }


    /// Returns the metrics of the completed rounds, in order.
    #[inline]
    pub fn metrics(&self) -> &[RoundMetrics] {
        &self.metrics[..]
    }


    /// Returns the ensemble built so far.
    #[inline]
    pub fn ensemble(&self) -> &WeightedMajority<H> {
        &self.ensemble
    }


    /// Returns the weight on a hypothesis with weighted error `err`.
    #[inline]
    fn vote_weight(&self, err: f64) -> f64 {
        ((1f64 - err) / err.max(self.epsilon)).ln() / 2f64
    }


    /// Returns the normalization factor for weighted error `err`.
    #[inline]
    fn normalizer(&self, err: f64) -> f64 {
        2f64 * (err.max(self.epsilon) * (1f64 - err)).sqrt()
    }


    /// Updates `self.dist`.
    /// Fails if some weight is no longer finite,
    /// in which case `self.dist` keeps its previous value.
    #[inline]
    fn update_params(
        &mut self,
        predictions: &[i64],
        alpha: f64,
        z: f64,
        round: usize,
    ) -> Result<()>
    {
        let margins = helpers::margins(predictions, self.train.target())
            .collect::<Vec<f64>>();

        let dist = self.dist.par_iter()
            .zip(margins)
            .map(|(d, yp)| d * (-alpha * yp).exp() / z)
            .collect::<Vec<f64>>();

        checkers::finite_weights(&dist[..], round)?;
        self.dist = dist;
        Ok(())
    }
}


/// Adds `alpha * predictions` to `scores` and
/// returns the error rate of the signs of `scores`.
fn accumulate(scores: &mut [f64], alpha: f64, predictions: &[i64], target: &[f64])
    -> f64
{
    scores.iter_mut()
        .zip(predictions)
        .for_each(|(s, &p)| { *s += alpha * p as f64; });

    let labels = scores.iter().map(|&s| helpers::sign(s));
    let mistakes = helpers::mistakes(labels, target);
    helpers::error_rate(&mistakes)
}


impl<H> Booster<H> for AdaBoost<'_, H>
    where H: Classifier + Clone + Sync,
{
    type Output = WeightedMajority<H>;


    fn name(&self) -> &str {
        "AdaBoost"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_sample, n_feature) = self.train.shape();
        let n_test = self.test.shape().0;
        let info = Vec::from([
            ("# of examples", format!("{n_sample}")),
            ("# of test examples", format!("{n_test}")),
            ("# of features", format!("{n_feature}")),
            ("# of rounds", format!("{}", self.rounds)),
            ("Epsilon", format!("{}", self.epsilon)),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) -> Result<()> {
        checkers::same_dimension(self.train, self.test)?;
        checkers::stability_epsilon(self.epsilon)?;

        let n_sample = self.train.shape().0;
        let n_test = self.test.shape().0;
        let uni = 1f64 / n_sample as f64;
        self.dist = vec![uni; n_sample];

        self.ensemble = WeightedMajority::new();
        self.train_scores = vec![0f64; n_sample];
        self.test_scores = vec![0f64; n_test];
        self.metrics = Vec::with_capacity(self.rounds.min(1 << 16));

        Ok(())
    }


    fn boost<W>(&mut self, weak_learner: &W, iteration: usize)
        -> Result<ControlFlow<usize>>
        where W: WeakLearner<Hypothesis = H>,
    {
        if iteration >= self.rounds {
            return Ok(ControlFlow::Break(self.rounds));
        }


        // Get a new hypothesis
        let out = weak_learner.produce(self.train, &self.dist[..]);
        let err = out.weighted_error;


        let alpha = self.vote_weight(err);
        let z = self.normalizer(err);
        self.update_params(&out.predictions[..], alpha, z, iteration)?;


        // The running scores are summed in the same order as
        // `WeightedMajority::evaluate`, so these errors equal `check`.
        let train_error = accumulate(
            &mut self.train_scores, alpha, &out.predictions[..], self.train.target(),
        );
        let test_predictions = out.hypothesis.predict_all(self.test);
        let test_error = accumulate(
            &mut self.test_scores, alpha, &test_predictions[..], self.test.target(),
        );

        self.ensemble.push(alpha, out.hypothesis);
        self.metrics.push(RoundMetrics {
            round: iteration,
            alpha,
            weighted_error: err,
            train_error,
            test_error,
        });

        Ok(ControlFlow::Continue(()))
    }


    fn postprocess(&mut self) -> Self::Output {
        self.ensemble.clone()
    }
}


impl<H> Research for AdaBoost<'_, H> {
    fn current_metrics(&self) -> Option<&RoundMetrics> {
        self.metrics.last()
    }
}
