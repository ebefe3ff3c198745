//! Contract type identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Numeric identifier scoping cost configurations to a contract type.
///
/// Configurations for different contract types are independent; a lookup for
/// one type never matches records of another. The identifier is numeric on
/// the wire, and callers holding a raw string must parse it before querying;
/// a non-numeric value means "no configuration available", not an error.
///
/// # Example
///
/// ```
/// use vigencia_engine::models::ContractTypeId;
///
/// let clt: ContractTypeId = "1".parse().unwrap();
/// assert_eq!(clt, ContractTypeId(1));
/// assert!("clt".parse::<ContractTypeId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractTypeId(pub u32);

impl FromStr for ContractTypeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(ContractTypeId)
    }
}

impl fmt::Display for ContractTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
