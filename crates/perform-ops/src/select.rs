//! Gated selection, mostly for building sparse collections.
//!
//! Two gate kinds, resolved statically:
//! - boolean gate ([`Gate`]): `bool` or `Option<bool>`; absent or `false` closes it
//! - presence gate ([`select_if_present`]): any `Option<G>`; present opens it,
//!   whatever the wrapped value is (a wrapped `false` still opens it)
//!
//! `right` is a thunk and only runs when the gate is open, so side effects of
//! producing it are skipped for a closed or absent gate.

use crate::trace;

/// A tri-state condition: `None` is absent, `Some(b)` is a present boolean.
pub trait Gate {
    fn gate(&self) -> Option<bool>;
}

impl Gate for bool {
    fn gate(&self) -> Option<bool> {
        Some(*self)
    }
}

impl Gate for Option<bool> {
    fn gate(&self) -> Option<bool> {
        *self
    }
}

impl<G: Gate + ?Sized> Gate for &G {
    fn gate(&self) -> Option<bool> {
        (**self).gate()
    }
}

/// `Some(right())` when the gate is present and true, otherwise `None`.
pub fn select_if<G, T>(gate: G, right: impl FnOnce() -> T) -> Option<T>
where
    G: Gate,
{
    let state = gate.gate();
    trace::emit_gate("select_if", state);
    match state {
        Some(true) => Some(right()),
        Some(false) | None => None,
    }
}

/// Boolean gate over an optional `right`; an open gate yields `right` as is.
pub fn select_optional_if<G, T>(gate: G, right: impl FnOnce() -> Option<T>) -> Option<T>
where
    G: Gate,
{
    select_if(gate, right).flatten()
}

/// Presence gate: `Some(right())` whenever `gate` is `Some`, whatever it holds.
pub fn select_if_present<G, T>(gate: Option<G>, right: impl FnOnce() -> T) -> Option<T> {
    trace::emit_optional("select_if_present", gate.is_some());
    gate.is_some().then(right)
}

/// Presence gate over an optional `right`; an open gate yields `right` as is.
pub fn select_optional_if_present<G, T>(
    gate: Option<G>,
    right: impl FnOnce() -> Option<T>,
) -> Option<T> {
    select_if_present(gate, right).flatten()
}

/// Drop absent items, keeping present ones in order.
pub fn compact<I, T>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    items.into_iter().flatten().collect()
}
