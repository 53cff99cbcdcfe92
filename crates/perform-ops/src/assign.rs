//! Assign-on-presence.

use crate::trace;

/// Overwrite `target` with the value in `source`; leave it alone on `None`.
pub fn assign_if_present<T>(target: &mut T, source: Option<T>) {
    trace::emit_optional("assign_if_present", source.is_some());
    if let Some(value) = source {
        *target = value;
    }
}

/// Same as [`assign_if_present`], but returns the previous value when it fired.
pub fn replace_if_present<T>(target: &mut T, source: Option<T>) -> Option<T> {
    trace::emit_optional("replace_if_present", source.is_some());
    source.map(|value| std::mem::replace(target, value))
}
