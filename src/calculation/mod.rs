//! Calculation logic for the vigência cost engine.
//!
//! This module contains the pure computation functions: currency rounding and
//! localized amount parsing, the benefit calculator with its two distinct
//! conversion chains (annual provisions vs monthly FGTS), and the aggregator
//! producing the mutually consistent daily and monthly totals.

mod aggregate;
mod benefit;
mod money;

pub use aggregate::{CostTotals, aggregate};
pub use benefit::{compute, cost_per_hour, resolve_working_days};
pub use money::{parse_localized_amount, round_currency};
