//! The vigência record: a dated, versioned description of a collaborator's
//! contract terms together with its derived daily cost figures.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BenefitSet, ContractTypeId, DerivedField};

/// A contract vigência being edited or persisted.
///
/// Created empty on "new vigência" and populated either from a persisted
/// record (fields taken verbatim, aggregates recomputed) or by user input
/// plus automatic derivation. The record is owned by a single edit session
/// and never mutated outside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VigenciaRecord {
    /// Date from which these contract terms apply.
    pub effective_date: Option<NaiveDate>,
    /// Contract type the vigência belongs to.
    pub contract_type: Option<ContractTypeId>,
    /// Gross monthly salary.
    pub monthly_salary: Decimal,
    /// Contracted hours per day, when known.
    pub daily_contracted_hours: Option<Decimal>,
    /// Per-record override of the working days per month divisor.
    pub working_days: Option<u32>,
    /// Daily vacation provision.
    pub vacation_daily: Decimal,
    /// Daily one-third vacation bonus provision.
    pub one_third_vacation_daily: Decimal,
    /// Daily thirteenth-salary provision.
    pub thirteenth_salary_daily: Decimal,
    /// Daily FGTS amount.
    pub fgts_daily: Decimal,
    /// Daily transport voucher.
    pub transport_daily: Decimal,
    /// Daily meal voucher.
    pub meal_daily: Decimal,
    /// Manually entered daily cost allowance; never derived from a
    /// configuration and never touched by restore-defaults.
    pub cost_allowance_daily: Decimal,
    /// Cost per contracted hour.
    pub cost_per_hour: Decimal,
    /// Total daily cost: salary portion plus every daily field.
    pub daily_total_cost: Decimal,
    /// Total monthly cost, always derived as daily total times working days.
    pub monthly_total_cost: Decimal,
}

impl VigenciaRecord {
    /// Creates an empty record for a new vigência.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the daily amount stored for a benefit-derived field.
    pub fn benefit(&self, field: DerivedField) -> Decimal {
        match field {
            DerivedField::Vacation => self.vacation_daily,
            DerivedField::OneThirdVacation => self.one_third_vacation_daily,
            DerivedField::ThirteenthSalary => self.thirteenth_salary_daily,
            DerivedField::Fgts => self.fgts_daily,
            DerivedField::Transport => self.transport_daily,
            DerivedField::Meal => self.meal_daily,
        }
    }

    /// Sets the daily amount for a benefit-derived field.
    pub fn set_benefit(&mut self, field: DerivedField, amount: Decimal) {
        match field {
            DerivedField::Vacation => self.vacation_daily = amount,
            DerivedField::OneThirdVacation => self.one_third_vacation_daily = amount,
            DerivedField::ThirteenthSalary => self.thirteenth_salary_daily = amount,
            DerivedField::Fgts => self.fgts_daily = amount,
            DerivedField::Transport => self.transport_daily = amount,
            DerivedField::Meal => self.meal_daily = amount,
        }
    }

    /// Returns the stored benefit dailies as a [`BenefitSet`].
    pub fn benefit_set(&self) -> BenefitSet {
        BenefitSet {
            vacation_daily: self.vacation_daily,
            one_third_vacation_daily: self.one_third_vacation_daily,
            thirteenth_salary_daily: self.thirteenth_salary_daily,
            fgts_daily: self.fgts_daily,
            transport_daily: self.transport_daily,
            meal_daily: self.meal_daily,
            cost_per_hour: self.cost_per_hour,
        }
    }

    /// Copies the given benefit fields from a computed set into the record.
    pub fn apply_benefits<I>(&mut self, benefits: &BenefitSet, fields: I)
    where
        I: IntoIterator<Item = DerivedField>,
    {
        for field in fields {
            self.set_benefit(field, benefits.amount(field));
        }
    }
}
