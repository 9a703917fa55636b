/// Defines the weak learner `DStump`.
pub mod dstump;
/// Defines the stump `DStumpClassifier` that `DStump` produces.
pub mod dstump_classifier;

pub use dstump::DStump;
pub use dstump_classifier::{
    DStumpClassifier,
    Polarity,
    Split,
};
