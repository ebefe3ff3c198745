//! The configuration lookup seam and input normalization.
//!
//! Edit sessions consume exactly one query contract: resolve the effective
//! cost configuration for a date and contract type. In-process callers use
//! the in-memory [`CostConfigSet`]; the HTTP layer exposes the identical
//! contract at `GET /config-lookup` for out-of-process callers.

use chrono::NaiveDate;

use crate::models::ContractTypeId;

use super::types::{CostConfigSet, CostConfiguration};

/// The single query contract consumed by edit sessions.
///
/// A `None` result means "no configuration available" and is an expected,
/// non-exceptional outcome; transport failures in remote implementations must
/// collapse to `None` as well, never surface as panics or errors.
pub trait ConfigLookup {
    /// Resolves the configuration effective for the given date and contract
    /// type.
    fn lookup(
        &self,
        date: NaiveDate,
        contract_type: ContractTypeId,
    ) -> impl Future<Output = Option<CostConfiguration>> + Send;
}

impl ConfigLookup for CostConfigSet {
    async fn lookup(
        &self,
        date: NaiveDate,
        contract_type: ContractTypeId,
    ) -> Option<CostConfiguration> {
        self.resolve(date, contract_type).cloned()
    }
}

/// Normalizes an effective-date string to a calendar date.
///
/// Accepts `YYYY-MM-DD` or an ISO datetime; anything after `T` is discarded
/// since time-of-day never participates in resolution.
///
/// # Example
///
/// ```
/// use vigencia_engine::config::parse_effective_date;
/// use chrono::NaiveDate;
///
/// let date = parse_effective_date("2024-03-15T00:00:00").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
/// assert!(parse_effective_date("15/03/2024").is_none());
/// ```
pub fn parse_effective_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split('T').next().unwrap_or(raw).trim();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Parses a raw contract-type value, refusing anything non-numeric.
///
/// A missing or unparseable contract type must never reach the store; callers
/// short-circuit to "no configuration" instead of querying.
pub fn parse_contract_type(raw: Option<&str>) -> Option<ContractTypeId> {
    raw.and_then(|s| s.parse::<ContractTypeId>().ok())
}
