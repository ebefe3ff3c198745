//! Core data models for the vigência cost engine.
//!
//! This module contains all the domain models used throughout the engine.

mod benefit_set;
mod contract_type;
mod vigencia;

pub use benefit_set::{BenefitSet, DerivedField};
pub use contract_type::ContractTypeId;
pub use vigencia::VigenciaRecord;
