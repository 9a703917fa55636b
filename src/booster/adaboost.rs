//! This directory defines `AdaBoost` by Freund & Schapire, 1995.
pub mod adaboost_algorithm;
pub mod options;

pub use adaboost_algorithm::AdaBoost;
pub use options::AdaBoostConfig;
