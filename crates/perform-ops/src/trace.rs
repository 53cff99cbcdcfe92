//! Tracing hooks (feature: `tracing`).
//!
//! Without the feature these compile to nothing. Wire a subscriber in the
//! binary layer if you want to see them.

#[cfg(feature = "tracing")]
pub fn emit_optional(op: &'static str, present: bool) {
    tracing::trace!(op, present, "optional operand");
}

#[cfg(not(feature = "tracing"))]
pub fn emit_optional(_op: &'static str, _present: bool) { /* no-op */
}

#[cfg(feature = "tracing")]
pub fn emit_gate(op: &'static str, gate: Option<bool>) {
    tracing::trace!(op, ?gate, "gate evaluated");
}

#[cfg(not(feature = "tracing"))]
pub fn emit_gate(_op: &'static str, _gate: Option<bool>) { /* no-op */
}
