//! Labor Cost Resolution & Computation Engine for contract vigências.
//!
//! This crate resolves which versioned cost configuration applies to a
//! collaborator's contract on a given date and derives a mutually consistent
//! set of daily and monthly labor-cost figures from it: vacation provision,
//! one-third vacation bonus, thirteenth-salary provision, FGTS, transport and
//! meal vouchers, hourly cost, and the daily/monthly totals.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
