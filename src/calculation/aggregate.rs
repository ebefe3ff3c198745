//! Aggregation of daily figures into the two authoritative totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::BenefitSet;

use super::money::round_currency;

/// The two mutually consistent cost totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostTotals {
    /// Salary portion plus every daily benefit and allowance field.
    pub daily_total_cost: Decimal,
    /// Always `daily_total_cost * working_days`; never accumulated
    /// independently field by field.
    pub monthly_total_cost: Decimal,
}

impl CostTotals {
    /// Returns zeroed totals.
    pub fn zero() -> Self {
        Self {
            daily_total_cost: Decimal::ZERO,
            monthly_total_cost: Decimal::ZERO,
        }
    }
}

/// Combines the salary-derived daily amounts and the manual daily cost
/// allowance into the daily and monthly totals.
///
/// `daily_total = salary/working_days + sum(benefit dailies) + cost_allowance`,
/// rounded to two decimal places; `monthly_total = daily_total * working_days`.
/// The monthly figure is derived from the rounded daily figure so that
/// `monthly == round(daily * working_days, 2)` holds exactly; integer-day
/// multiplication introduces no further rounding drift.
///
/// Must be re-run after every change to any daily field or to the working
/// days. Never fails: a zero working-days divisor or non-positive salary
/// contributes zero instead of erroring.
///
/// # Example
///
/// ```
/// use vigencia_engine::calculation::aggregate;
/// use vigencia_engine::models::BenefitSet;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = Decimal::from_str("3000.00").unwrap();
/// let totals = aggregate(salary, &BenefitSet::zero(), Decimal::ZERO, 22);
/// // Resolution miss: only the salary portion remains.
/// assert_eq!(totals.daily_total_cost, Decimal::from_str("136.36").unwrap());
/// assert_eq!(totals.monthly_total_cost, Decimal::from_str("2999.92").unwrap());
/// ```
pub fn aggregate(
    monthly_salary: Decimal,
    benefits: &BenefitSet,
    cost_allowance_daily: Decimal,
    working_days: u32,
) -> CostTotals {
    let divisor = Decimal::from(working_days);
    let daily_salary_portion = if monthly_salary > Decimal::ZERO {
        monthly_salary.checked_div(divisor).unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    let daily_total_cost =
        round_currency(daily_salary_portion + benefits.total_daily() + cost_allowance_daily);
    let monthly_total_cost = round_currency(daily_total_cost * divisor);

    CostTotals {
        daily_total_cost,
        monthly_total_cost,
    }
}
