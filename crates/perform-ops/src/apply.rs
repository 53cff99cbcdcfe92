//! Apply-and-return operators.
//!
//! Reference flow takes a `SharedRef` handle, mutates the target through it and
//! returns the same handle, so the result is identity-equal to the input and all
//! other aliases observe the mutation.
//!
//! Copy flow borrows the original, mutates a clone and returns the clone. The
//! original binding is never touched.
//!
//! Failures inside a procedure are never caught here. Panics unwind straight
//! through; `try_*` variants hand the caller's own error back unchanged.

use perform_core::SharedRef;

use crate::trace;

/// Run `f` on the target behind `object`, then return `object` itself.
pub fn perform_after_reference<R, F>(object: R, f: F) -> R
where
    R: SharedRef,
    F: FnOnce(&mut R::Target),
{
    object.with_mut(f);
    object
}

/// Clone `object`, run `f` on the clone, return the clone.
pub fn perform_after_copy<T, F>(object: &T, f: F) -> T
where
    T: Clone,
    F: FnOnce(&mut T),
{
    let mut copy = object.clone();
    f(&mut copy);
    copy
}

/// `None` stays `None` and `f` is never called.
pub fn perform_after_reference_if_present<R, F>(object: Option<R>, f: F) -> Option<R>
where
    R: SharedRef,
    F: FnOnce(&mut R::Target),
{
    trace::emit_optional("perform_after_reference_if_present", object.is_some());
    object.map(|o| perform_after_reference(o, f))
}

/// `None` stays `None` and `f` is never called. Pass `opt.as_ref()`.
pub fn perform_after_copy_if_present<T, F>(object: Option<&T>, f: F) -> Option<T>
where
    T: Clone,
    F: FnOnce(&mut T),
{
    trace::emit_optional("perform_after_copy_if_present", object.is_some());
    object.map(|o| perform_after_copy(o, f))
}

/// Fallible reference flow.
///
/// On `Err` the target keeps whatever `f` did before failing; there is no rollback.
pub fn try_perform_after_reference<R, E, F>(object: R, f: F) -> Result<R, E>
where
    R: SharedRef,
    F: FnOnce(&mut R::Target) -> Result<(), E>,
{
    object.with_mut(f)?;
    Ok(object)
}

/// Fallible copy flow. On `Err` the partially mutated copy is dropped.
pub fn try_perform_after_copy<T, E, F>(object: &T, f: F) -> Result<T, E>
where
    T: Clone,
    F: FnOnce(&mut T) -> Result<(), E>,
{
    let mut copy = object.clone();
    f(&mut copy)?;
    Ok(copy)
}

pub fn try_perform_after_reference_if_present<R, E, F>(
    object: Option<R>,
    f: F,
) -> Result<Option<R>, E>
where
    R: SharedRef,
    F: FnOnce(&mut R::Target) -> Result<(), E>,
{
    trace::emit_optional("try_perform_after_reference_if_present", object.is_some());
    object
        .map(|o| try_perform_after_reference(o, f))
        .transpose()
}

pub fn try_perform_after_copy_if_present<T, E, F>(object: Option<&T>, f: F) -> Result<Option<T>, E>
where
    T: Clone,
    F: FnOnce(&mut T) -> Result<(), E>,
{
    trace::emit_optional("try_perform_after_copy_if_present", object.is_some());
    object.map(|o| try_perform_after_copy(o, f)).transpose()
}

/// Like [`perform_after_reference`], but reports a busy or poisoned handle as
/// an error instead of panicking or recovering.
pub fn checked_perform_after_reference<R, F>(object: R, f: F) -> perform_core::Result<R>
where
    R: SharedRef,
    F: FnOnce(&mut R::Target),
{
    object.try_with_mut(f)?;
    Ok(object)
}
