//! Configuration types for cost resolution.
//!
//! This module contains the strongly-typed cost configuration records
//! deserialized from YAML files, and the set type that resolves which record
//! is effective for a given date and contract type.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ContractTypeId;

/// Working days per month used when neither the record nor the configuration
/// supplies a divisor.
pub const DEFAULT_WORKING_DAYS: u32 = 22;

/// A dated, contract-type-scoped cost configuration record.
///
/// Percentage fields are percentages of the monthly salary (e.g. `8` means
/// 8%). The transport and meal allowances are already daily currency amounts,
/// not percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostConfiguration {
    /// Date from which this configuration applies.
    pub effective_date: NaiveDate,
    /// Contract type this configuration is scoped to.
    pub contract_type: ContractTypeId,
    /// Divisor converting monthly figures to daily figures.
    #[serde(default)]
    pub working_days_per_month: Option<u32>,
    /// FGTS as a percentage of monthly salary. Monthly, not annualized.
    #[serde(default)]
    pub fgts_percent: Decimal,
    /// Vacation provision as a percentage of monthly salary (annual).
    #[serde(default)]
    pub vacation_percent: Decimal,
    /// One-third vacation bonus as a percentage of monthly salary (annual).
    #[serde(default)]
    pub one_third_vacation_percent: Decimal,
    /// Thirteenth salary as a percentage of monthly salary (annual).
    #[serde(default)]
    pub thirteenth_salary_percent: Decimal,
    /// Daily transport voucher amount.
    #[serde(default)]
    pub daily_transport_allowance: Decimal,
    /// Daily meal voucher amount.
    #[serde(default)]
    pub daily_meal_allowance: Decimal,
}

/// The full collection of cost configuration records, kept sorted by
/// effective date ascending.
///
/// Resolution selects the most recent record effective on or before the
/// target date among those matching the requested contract type. Records are
/// uniquely keyed by (effective date, contract type), so ties are impossible.
#[derive(Debug, Clone, Default)]
pub struct CostConfigSet {
    configurations: Vec<CostConfiguration>,
}

impl CostConfigSet {
    /// Creates a set from unordered records, sorting by effective date.
    pub fn new(configurations: Vec<CostConfiguration>) -> Self {
        let mut sorted = configurations;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            configurations: sorted,
        }
    }

    /// Resolves the configuration effective for the given date and contract
    /// type.
    ///
    /// Among records with `effective_date <= date` and a matching contract
    /// type, the one with the maximum effective date wins. Returns `None`
    /// when no record matches; this is an expected outcome, and callers must
    /// treat it as "no defaults available".
    pub fn resolve(
        &self,
        date: NaiveDate,
        contract_type: ContractTypeId,
    ) -> Option<&CostConfiguration> {
        // Sorted ascending, so the last match is the most recent.
        self.configurations
            .iter()
            .rfind(|c| c.contract_type == contract_type && c.effective_date <= date)
    }

    /// Returns all records, sorted by effective date ascending.
    pub fn configurations(&self) -> &[CostConfiguration] {
        &self.configurations
    }

    /// Number of records in the set.
    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    /// Returns true when the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }
}
