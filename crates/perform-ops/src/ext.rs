//! Method-call spellings of the free functions.
//!
//! ```
//! use perform_ops::{PerformCopyExt, AssignIfPresentExt};
//!
//! #[derive(Clone)]
//! struct Insets { top: u32, left: u32 }
//!
//! let base = Insets { top: 0, left: 0 };
//! let padded = base.perform_after_copy(|i| i.top = 8);
//! assert_eq!((base.top, padded.top), (0, 8));
//!
//! let mut left = padded.left;
//! left.assign_if_present(Some(4));
//! assert_eq!(left, 4);
//! ```

use perform_core::SharedRef;

use crate::{apply, assign, logic};

pub trait PerformCopyExt: Clone {
    fn perform_after_copy<F>(&self, f: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        apply::perform_after_copy(self, f)
    }
}

impl<T: Clone> PerformCopyExt for T {}

pub trait PerformReferenceExt: SharedRef + Sized {
    fn perform_after_reference<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut Self::Target),
    {
        apply::perform_after_reference(self, f)
    }
}

impl<R: SharedRef> PerformReferenceExt for R {}

pub trait OptionPerformExt<T> {
    fn perform_after_copy_if_present<F>(&self, f: F) -> Option<T>
    where
        T: Clone,
        F: FnOnce(&mut T);

    fn perform_after_reference_if_present<F>(self, f: F) -> Option<T>
    where
        T: SharedRef,
        F: FnOnce(&mut T::Target);
}

impl<T> OptionPerformExt<T> for Option<T> {
    fn perform_after_copy_if_present<F>(&self, f: F) -> Option<T>
    where
        T: Clone,
        F: FnOnce(&mut T),
    {
        apply::perform_after_copy_if_present(self.as_ref(), f)
    }

    fn perform_after_reference_if_present<F>(self, f: F) -> Option<T>
    where
        T: SharedRef,
        F: FnOnce(&mut T::Target),
    {
        apply::perform_after_reference_if_present(self, f)
    }
}

pub trait OptionBoolExt {
    fn negate_optional(self) -> Option<bool>;
}

impl OptionBoolExt for Option<bool> {
    fn negate_optional(self) -> Option<bool> {
        logic::negate_optional_bool(self)
    }
}

pub trait AssignIfPresentExt: Sized {
    fn assign_if_present(&mut self, source: Option<Self>) {
        assign::assign_if_present(self, source)
    }
}

impl<T> AssignIfPresentExt for T {}
