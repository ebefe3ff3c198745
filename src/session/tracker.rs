//! Tracking of which benefit fields were auto-derived versus user-edited.

use std::collections::HashMap;

use crate::models::DerivedField;

/// Per-field derivation state within one edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    /// Last populated by the calculator from a configuration lookup.
    Derived,
    /// Manually changed by the user after (or instead of) derivation.
    UserEdited,
}

/// Tracks, per editing session, which derived fields were last populated from
/// a configuration lookup versus manually edited.
///
/// The tracker supports the restore-defaults action without letting automatic
/// recomputes clobber deliberate edits or persisted values:
///
/// - A field is **auto-writable** (overwritten by the debounced recompute)
///   while it is marked derived, or while it is untouched in a session that
///   did not start from a persisted record.
/// - [`clear`](OverrideTracker::clear) runs on load-from-persistence, after
///   which no field is auto-writable until an explicit restore re-marks it.
#[derive(Debug, Clone, Default)]
pub struct OverrideTracker {
    state: HashMap<DerivedField, FieldState>,
    from_persistence: bool,
}

impl OverrideTracker {
    /// Creates a tracker for a fresh (empty) session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks fields as populated by the calculator.
    pub fn mark_derived<I>(&mut self, fields: I)
    where
        I: IntoIterator<Item = DerivedField>,
    {
        for field in fields {
            self.state.insert(field, FieldState::Derived);
        }
    }

    /// Records a manual edit; the field stops being auto-writable but other
    /// fields keep their state.
    pub fn mark_user_edited(&mut self, field: DerivedField) {
        self.state.insert(field, FieldState::UserEdited);
    }

    /// Returns true while the field's current value came from a lookup.
    pub fn is_derived(&self, field: DerivedField) -> bool {
        self.state.get(&field) == Some(&FieldState::Derived)
    }

    /// Returns true when an automatic recompute may overwrite the field.
    pub fn auto_writable(&self, field: DerivedField) -> bool {
        match self.state.get(&field) {
            Some(FieldState::Derived) => true,
            Some(FieldState::UserEdited) => false,
            None => !self.from_persistence,
        }
    }

    /// Resets all derivation state for a record loaded from persistence.
    ///
    /// Persisted values are never treated as auto-derived; after a clear,
    /// only an explicit restore-defaults action may overwrite them.
    pub fn clear(&mut self) {
        self.state.clear();
        self.from_persistence = true;
    }
}
