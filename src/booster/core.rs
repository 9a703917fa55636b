use crate::WeakLearner;
use crate::error::Result;

use std::ops::ControlFlow;


/// The trait [`Booster`] defines the standard framework of boosting.
/// Here, the standard framework is defined as
/// a repeated game between **Booster** and **Weak Learner**
/// of the following form:
///
/// In each round `t = 0, 1, ...`,
/// 1. Booster chooses a weighting `d` over the training examples,
/// 2. Weak Learner returns a hypothesis `h` that has a small weighted error
///    with respect to `d`,
/// 3. Booster updates its state.
///
/// After the game, Booster outputs a combined hypothesis.
///
/// [`Booster::run`] plays the game;
/// implementors only write the three phases.
pub trait Booster<H> {
    /// The combined hypothesis returned by [`Booster::run`].
    type Output;


    /// Returns the name of the boosting algorithm.
    fn name(&self) -> &str;


    /// Returns the information of the boosting algorithm as `String`.
    /// This method is used by [`Logger`](crate::research::Logger).
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Runs the boosting algorithm and
    /// returns the combined hypothesis.
    fn run<W>(&mut self, weak_learner: &W) -> Result<Self::Output>
        where W: WeakLearner<Hypothesis = H>,
    {
        self.preprocess()?;

        for iteration in 0.. {
            if self.boost(weak_learner, iteration)?.is_break() {
                break;
            }
        }

        Ok(self.postprocess())
    }


    /// Validates the inputs and resets the state of the booster.
    /// Calling `preprocess` twice starts the game from scratch.
    fn preprocess(&mut self) -> Result<()>;


    /// Plays the `iteration`-th round.
    /// Returns `ControlFlow::Break(n)` with the number of completed
    /// rounds `n` when the booster stops.
    fn boost<W>(&mut self, weak_learner: &W, iteration: usize)
        -> Result<ControlFlow<usize>>
        where W: WeakLearner<Hypothesis = H>;


    /// Returns the combined hypothesis built so far.
    fn postprocess(&mut self) -> Self::Output;
}
