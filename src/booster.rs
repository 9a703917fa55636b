//! Provides the [`Booster`] trait and [`AdaBoost`].

mod core;
mod metrics;
mod adaboost;


/// Booster trait
pub use self::core::Booster;

pub use self::metrics::RoundMetrics;

pub use self::adaboost::{
    AdaBoost,
    AdaBoostConfig,
};
