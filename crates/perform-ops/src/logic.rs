//! Three-valued logic over `Option<bool>`.

/// `Some(b)` becomes `Some(!b)`; `None` stays `None`.
pub fn negate_optional_bool(value: Option<bool>) -> Option<bool> {
    value.map(|b| !b)
}
