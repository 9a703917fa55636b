//! Pre-condition checks and small numeric helpers.

pub mod checkers;
pub mod helpers;
