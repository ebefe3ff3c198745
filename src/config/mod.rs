//! Cost configuration loading and resolution.
//!
//! This module provides the dated, contract-type-scoped cost configuration
//! records, the resolver that selects the effective record for a target date,
//! and the YAML directory loader.
//!
//! # Example
//!
//! ```no_run
//! use vigencia_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/cost").unwrap();
//! println!("Loaded {} cost configurations", loader.config().len());
//! ```

mod loader;
mod store;
mod types;

pub use loader::ConfigLoader;
pub use store::{ConfigLookup, parse_contract_type, parse_effective_date};
pub use types::{CostConfigSet, CostConfiguration, DEFAULT_WORKING_DAYS};
