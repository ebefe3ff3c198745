//! Benefit calculation functionality.
//!
//! This module derives the daily benefit amounts from a monthly salary and a
//! resolved cost configuration. Two conversion chains coexist and must not be
//! collapsed into one formula:
//!
//! - **Annual provisions** (vacation, one-third vacation, thirteenth salary):
//!   `percent/100 × salary` is an annual amount, divided by 12 for the
//!   monthly provision and by the working days for the daily figure.
//! - **FGTS**: `percent/100 × salary` is already a monthly amount and is only
//!   divided by the working days.
//!
//! The calculator never fails: non-positive salary yields an all-zero set and
//! any unresolvable input collapses to zero for the affected figure only.

use rust_decimal::Decimal;

use crate::config::{CostConfiguration, DEFAULT_WORKING_DAYS};
use crate::models::BenefitSet;

use super::money::round_currency;

const MONTHS_PER_YEAR: u32 = 12;

/// Resolves the effective working-days-per-month divisor.
///
/// Order: explicit record override if present and greater than zero, else the
/// configuration's divisor, else 22.
///
/// # Example
///
/// ```
/// use vigencia_engine::calculation::resolve_working_days;
///
/// assert_eq!(resolve_working_days(Some(20), None), 20);
/// assert_eq!(resolve_working_days(Some(0), None), 22);
/// assert_eq!(resolve_working_days(None, None), 22);
/// ```
pub fn resolve_working_days(override_days: Option<u32>, config_days: Option<u32>) -> u32 {
    match override_days {
        Some(days) if days > 0 => days,
        _ => match config_days {
            Some(days) if days > 0 => days,
            _ => DEFAULT_WORKING_DAYS,
        },
    }
}

/// Computes the cost per contracted hour from a monthly total.
///
/// Only defined when both the daily hours and the working days are positive;
/// otherwise the hourly cost is zero.
pub fn cost_per_hour(
    monthly_total_cost: Decimal,
    daily_hours: Decimal,
    working_days: u32,
) -> Decimal {
    if daily_hours <= Decimal::ZERO || working_days == 0 {
        return Decimal::ZERO;
    }
    let monthly_hours = daily_hours * Decimal::from(working_days);
    match monthly_total_cost.checked_div(monthly_hours) {
        Some(value) => round_currency(value),
        None => Decimal::ZERO,
    }
}

/// Derives the full set of daily benefit amounts.
///
/// # Arguments
///
/// * `monthly_salary` - Gross monthly salary; non-positive values yield an
///   all-zero set.
/// * `config` - The resolved cost configuration.
/// * `working_days` - The already-resolved working-days divisor (see
///   [`resolve_working_days`]).
/// * `daily_hours` - Contracted hours per day; the hourly cost is only
///   computed when this is known and positive.
///
/// All returned amounts are rounded half-up to two decimal places at the
/// point of return. The hourly cost is derived from the monthly total of the
/// salary portion plus the computed benefit dailies.
///
/// # Example
///
/// ```
/// use vigencia_engine::calculation::compute;
/// use vigencia_engine::config::CostConfiguration;
/// use vigencia_engine::models::ContractTypeId;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = CostConfiguration {
///     effective_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     contract_type: ContractTypeId(1),
///     working_days_per_month: Some(22),
///     fgts_percent: Decimal::from_str("8").unwrap(),
///     vacation_percent: Decimal::from_str("100").unwrap(),
///     one_third_vacation_percent: Decimal::ZERO,
///     thirteenth_salary_percent: Decimal::ZERO,
///     daily_transport_allowance: Decimal::ZERO,
///     daily_meal_allowance: Decimal::ZERO,
/// };
///
/// let salary = Decimal::from_str("3000.00").unwrap();
/// let benefits = compute(salary, &config, 22, None);
/// // 3000 / 12 / 22
/// assert_eq!(benefits.vacation_daily, Decimal::from_str("11.36").unwrap());
/// // 3000 * 0.08 / 22, no division by 12
/// assert_eq!(benefits.fgts_daily, Decimal::from_str("10.91").unwrap());
/// ```
pub fn compute(
    monthly_salary: Decimal,
    config: &CostConfiguration,
    working_days: u32,
    daily_hours: Option<Decimal>,
) -> BenefitSet {
    if monthly_salary <= Decimal::ZERO {
        return BenefitSet::zero();
    }

    let vacation_daily =
        annual_provision_daily(config.vacation_percent, monthly_salary, working_days);
    let one_third_vacation_daily = annual_provision_daily(
        config.one_third_vacation_percent,
        monthly_salary,
        working_days,
    );
    let thirteenth_salary_daily = annual_provision_daily(
        config.thirteenth_salary_percent,
        monthly_salary,
        working_days,
    );
    let fgts_daily = monthly_percent_daily(config.fgts_percent, monthly_salary, working_days);

    // Fixed allowances are already daily amounts and pass through unchanged.
    let transport_daily = round_currency(config.daily_transport_allowance);
    let meal_daily = round_currency(config.daily_meal_allowance);

    let mut benefits = BenefitSet {
        vacation_daily,
        one_third_vacation_daily,
        thirteenth_salary_daily,
        fgts_daily,
        transport_daily,
        meal_daily,
        cost_per_hour: Decimal::ZERO,
    };

    if let Some(hours) = daily_hours {
        let totals = super::aggregate::aggregate(
            monthly_salary,
            &benefits,
            Decimal::ZERO,
            working_days,
        );
        benefits.cost_per_hour = cost_per_hour(totals.monthly_total_cost, hours, working_days);
    }

    benefits
}

/// Annual-provision chain: percent of salary is an annual amount, spread over
/// 12 months, then over the working days.
fn annual_provision_daily(percent: Decimal, monthly_salary: Decimal, working_days: u32) -> Decimal {
    if working_days == 0 {
        return Decimal::ZERO;
    }
    let annual = percent / Decimal::ONE_HUNDRED * monthly_salary;
    let monthly = annual / Decimal::from(MONTHS_PER_YEAR);
    match monthly.checked_div(Decimal::from(working_days)) {
        Some(daily) => round_currency(daily),
        None => Decimal::ZERO,
    }
}

/// Monthly-percentage chain: percent of salary is already a monthly amount,
/// divided by the working days only. Used for FGTS.
fn monthly_percent_daily(percent: Decimal, monthly_salary: Decimal, working_days: u32) -> Decimal {
    if working_days == 0 {
        return Decimal::ZERO;
    }
    let monthly = percent / Decimal::ONE_HUNDRED * monthly_salary;
    match monthly.checked_div(Decimal::from(working_days)) {
        Some(daily) => round_currency(daily),
        None => Decimal::ZERO,
    }
}
