#![forbid(unsafe_code)]
//! perform: functional-style helpers for configuring values in place and
//! handling optionals.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use perform::prelude::*;
//!
//! #[derive(Clone)]
//! struct Label { text: String }
//!
//! // reference flow: every alias sees the change
//! let shared = Rc::new(RefCell::new(Label { text: "Original".into() }));
//! let same = perform_after_reference(Rc::clone(&shared), |l| l.text = "New".into());
//! assert!(same.ptr_eq(&shared));
//! assert_eq!(shared.borrow().text, "New");
//!
//! // copy flow: the original is untouched
//! let record = Label { text: "Original".into() };
//! let changed = perform_after_copy(&record, |l| l.text = "New".into());
//! assert_eq!((record.text.as_str(), changed.text.as_str()), ("Original", "New"));
//! ```

pub use perform_core;
pub use perform_ops;

pub mod prelude {
    pub use perform_core::prelude::*;
    pub use perform_ops::{
        assign_if_present, checked_perform_after_reference, compact, negate_optional_bool,
        perform_after_copy, perform_after_copy_if_present, perform_after_reference,
        perform_after_reference_if_present, replace_if_present, select_if, select_if_present,
        select_optional_if, select_optional_if_present, try_perform_after_copy,
        try_perform_after_copy_if_present, try_perform_after_reference,
        try_perform_after_reference_if_present, AssignIfPresentExt, Gate, OptionBoolExt,
        OptionPerformExt, PerformCopyExt, PerformReferenceExt,
    };
}
