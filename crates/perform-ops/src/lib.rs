#![forbid(unsafe_code)]
//! perform-ops: small functional helpers for in-place configuration and
//! optional handling.
//!
//! Two families that must never be unified:
//! - reference flow (`apply::perform_after_reference*`): mutate through a
//!   `SharedRef` handle and hand the *same* handle back
//! - copy flow (`apply::perform_after_copy*`): clone, mutate the clone, return it
//!
//! Plus optional helpers: three-valued negation (`logic`), gated selection for
//! sparse collections (`select`), and assign-on-presence (`assign`).
//!
//! Everything is pure and synchronous; no state is kept between calls.

pub mod apply;
pub mod assign;
pub mod ext;
pub mod logic;
pub mod select;
pub mod trace;

pub use apply::{
    checked_perform_after_reference, perform_after_copy, perform_after_copy_if_present,
    perform_after_reference, perform_after_reference_if_present, try_perform_after_copy,
    try_perform_after_copy_if_present, try_perform_after_reference,
    try_perform_after_reference_if_present,
};
pub use assign::{assign_if_present, replace_if_present};
pub use ext::{
    AssignIfPresentExt, OptionBoolExt, OptionPerformExt, PerformCopyExt, PerformReferenceExt,
};
pub use logic::negate_optional_bool;
pub use select::{
    compact, select_if, select_if_present, select_optional_if, select_optional_if_present, Gate,
};

pub use perform_core::SharedRef;
