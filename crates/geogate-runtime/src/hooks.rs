//! Extension points
//!
//! Callers can observe and rewrite the intermediate state of a gating
//! decision at two seams: after parsing (the condition set) and after
//! lookup (the location record). Hooks run in registration order; ordering
//! across multiple hooks is the caller's responsibility.

use geogate_core::{ConditionSet, LocationRecord, RawAttributes};

/// Rewrite the parsed condition set before evaluation.
///
/// `show_if` carries the block's original intent (true for "show if",
/// false for "hide if") so a hook can distinguish the two even though the
/// set already carries the inversion flag.
pub trait ConditionSetHook: Send + Sync {
    fn rewrite(&self, set: ConditionSet, attrs: &RawAttributes, show_if: bool) -> ConditionSet;
}

/// Substitute the resolved location record before evaluation.
///
/// Typical use: prefer an address from a user profile over the detected
/// location.
pub trait RecordHook: Send + Sync {
    fn rewrite(
        &self,
        record: LocationRecord,
        attrs: &RawAttributes,
        show_if: bool,
    ) -> LocationRecord;
}

impl<F> ConditionSetHook for F
where
    F: Fn(ConditionSet, &RawAttributes, bool) -> ConditionSet + Send + Sync,
{
    fn rewrite(&self, set: ConditionSet, attrs: &RawAttributes, show_if: bool) -> ConditionSet {
        self(set, attrs, show_if)
    }
}

impl<F> RecordHook for F
where
    F: Fn(LocationRecord, &RawAttributes, bool) -> LocationRecord + Send + Sync,
{
    fn rewrite(
        &self,
        record: LocationRecord,
        attrs: &RawAttributes,
        show_if: bool,
    ) -> LocationRecord {
        self(record, attrs, show_if)
    }
}
