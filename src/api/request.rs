//! Request types for the vigência cost engine API.
//!
//! This module defines the JSON request structures for the `/compute`
//! endpoint. Inputs tolerate the localized forms the surrounding form UI
//! produces: masked currency strings and ISO datetime effective dates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::parse_localized_amount;
use crate::config::parse_effective_date;
use crate::models::ContractTypeId;
use chrono::NaiveDate;

/// Request body for the `/compute` endpoint.
///
/// Carries the vigência inputs; every derived figure in the response is
/// computed server-side from the effective configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeRequest {
    /// Vigência effective date, `YYYY-MM-DD` or an ISO datetime.
    #[serde(default)]
    pub effective_date: Option<String>,
    /// Contract type identifier, numeric or numeric-string.
    #[serde(default)]
    pub contract_type: Option<ContractTypeRequest>,
    /// Gross monthly salary, a plain number or a masked currency string.
    pub monthly_salary: AmountRequest,
    /// Contracted hours per day.
    #[serde(default)]
    pub daily_contracted_hours: Option<Decimal>,
    /// Per-record working-days override.
    #[serde(default)]
    pub working_days: Option<u32>,
    /// Manual daily cost allowance.
    #[serde(default)]
    pub cost_allowance_daily: Option<Decimal>,
}

impl ComputeRequest {
    /// Normalized effective date, if one was supplied and parseable.
    pub fn parsed_effective_date(&self) -> Option<NaiveDate> {
        self.effective_date
            .as_deref()
            .and_then(parse_effective_date)
    }

    /// Normalized contract type; non-numeric input collapses to `None`.
    pub fn parsed_contract_type(&self) -> Option<ContractTypeId> {
        self.contract_type.as_ref().and_then(|c| c.parsed())
    }
}

/// A contract type on the wire: already numeric, or a raw string that must
/// parse as numeric before it may be used in a lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContractTypeRequest {
    /// Numeric identifier.
    Id(ContractTypeId),
    /// Raw string form, e.g. from a select input.
    Raw(String),
}

impl ContractTypeRequest {
    /// Returns the numeric identifier when the value is usable.
    pub fn parsed(&self) -> Option<ContractTypeId> {
        match self {
            ContractTypeRequest::Id(id) => Some(*id),
            ContractTypeRequest::Raw(raw) => raw.parse().ok(),
        }
    }
}

/// A monetary amount on the wire: a plain decimal or a masked pt-BR currency
/// string whose digits are centavos.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountRequest {
    /// A plain decimal amount.
    Amount(Decimal),
    /// A masked currency string such as `"3.000,00"`.
    Masked(String),
}

impl AmountRequest {
    /// Returns the decimal amount; unparseable input collapses to zero so the
    /// computation degrades to an all-zero benefit set instead of failing.
    pub fn amount(&self) -> Decimal {
        match self {
            AmountRequest::Amount(value) => *value,
            AmountRequest::Masked(raw) => parse_localized_amount(raw).unwrap_or(Decimal::ZERO),
        }
    }
}
