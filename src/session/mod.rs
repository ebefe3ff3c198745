//! Per-edit-session state: derivation tracking and the debounced session
//! driving resolution, computation, and aggregation.
//!
//! Each vigência edit session owns its record and derivation state; nothing
//! is shared across sessions.

mod edit_session;
mod tracker;

pub use edit_session::{DEFAULT_DEBOUNCE, EditSession, RefreshTicket};
pub use tracker::OverrideTracker;
