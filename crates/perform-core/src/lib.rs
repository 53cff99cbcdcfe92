#![forbid(unsafe_code)]
//! perform-core: the vocabulary shared by the operator crate.
//!
//! - `SharedRef`: reference-semantics handles (every alias sees a mutation)
//! - `Error`/`Result`: access failures on those handles
//!
//! No operators live here; see `perform-ops`.

pub mod error;
pub mod prelude;
pub mod shared;

pub use error::{Error, Result};
pub use shared::SharedRef;
