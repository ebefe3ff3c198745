//! The structured set of derived daily benefit amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A benefit field whose value can be auto-derived from a cost configuration.
///
/// The manual-only cost allowance is deliberately absent: it is never
/// populated from a configuration and never overwritten by restore-defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivedField {
    /// Daily vacation provision.
    Vacation,
    /// Daily one-third vacation bonus provision.
    OneThirdVacation,
    /// Daily thirteenth-salary provision.
    ThirteenthSalary,
    /// Daily FGTS amount.
    Fgts,
    /// Daily transport voucher.
    Transport,
    /// Daily meal voucher.
    Meal,
}

impl DerivedField {
    /// All benefit-derived fields, in record order.
    pub const ALL: [DerivedField; 6] = [
        DerivedField::Vacation,
        DerivedField::OneThirdVacation,
        DerivedField::ThirteenthSalary,
        DerivedField::Fgts,
        DerivedField::Transport,
        DerivedField::Meal,
    ];
}

/// The daily amounts derived from a monthly salary and a cost configuration.
///
/// All amounts are daily figures rounded to two decimal places. The hourly
/// cost is only non-zero when the contracted daily hours were known at
/// computation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitSet {
    /// Daily vacation provision (annual provision spread over 12 months).
    pub vacation_daily: Decimal,
    /// Daily one-third vacation bonus provision.
    pub one_third_vacation_daily: Decimal,
    /// Daily thirteenth-salary provision.
    pub thirteenth_salary_daily: Decimal,
    /// Daily FGTS amount (monthly percentage, not annualized).
    pub fgts_daily: Decimal,
    /// Daily transport voucher, passed through from the configuration.
    pub transport_daily: Decimal,
    /// Daily meal voucher, passed through from the configuration.
    pub meal_daily: Decimal,
    /// Cost per contracted hour, zero when hours are unknown.
    pub cost_per_hour: Decimal,
}

impl BenefitSet {
    /// Returns an all-zero benefit set.
    ///
    /// This is the defined outcome for a non-positive salary or a
    /// configuration resolution miss.
    pub fn zero() -> Self {
        Self {
            vacation_daily: Decimal::ZERO,
            one_third_vacation_daily: Decimal::ZERO,
            thirteenth_salary_daily: Decimal::ZERO,
            fgts_daily: Decimal::ZERO,
            transport_daily: Decimal::ZERO,
            meal_daily: Decimal::ZERO,
            cost_per_hour: Decimal::ZERO,
        }
    }

    /// Returns the daily amount for a benefit-derived field.
    pub fn amount(&self, field: DerivedField) -> Decimal {
        match field {
            DerivedField::Vacation => self.vacation_daily,
            DerivedField::OneThirdVacation => self.one_third_vacation_daily,
            DerivedField::ThirteenthSalary => self.thirteenth_salary_daily,
            DerivedField::Fgts => self.fgts_daily,
            DerivedField::Transport => self.transport_daily,
            DerivedField::Meal => self.meal_daily,
        }
    }

    /// Sum of the six daily benefit amounts (excludes the hourly cost).
    pub fn total_daily(&self) -> Decimal {
        DerivedField::ALL.iter().map(|f| self.amount(*f)).sum()
    }
}

impl Default for BenefitSet {
    fn default() -> Self {
        Self::zero()
    }
}
