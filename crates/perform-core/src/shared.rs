//! Reference-semantics handles.
//!
//! A `SharedRef` is a cheap handle to one storage location. Cloning the handle
//! creates another alias; a mutation made through any alias is visible through
//! all of them. Value types (plain `T: Clone`) deliberately do *not* implement
//! this trait, so the reference and copy operator families can never be mixed up.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::error::{Error, Result};

/// A handle whose target can be mutated through a shared borrow.
pub trait SharedRef {
    type Target: ?Sized;

    /// Run `f` with exclusive access to the target.
    ///
    /// Access failures surface the way the underlying handle reports them:
    /// a `RefCell` that is already borrowed panics. Poisoned locks are
    /// recovered, since nothing here depends on the target's invariants.
    fn with_mut<U>(&self, f: impl FnOnce(&mut Self::Target) -> U) -> U;

    /// Checked form of [`SharedRef::with_mut`].
    fn try_with_mut<U>(&self, f: impl FnOnce(&mut Self::Target) -> U) -> Result<U>;

    /// Identity comparison: true when both handles alias the same storage.
    fn ptr_eq(&self, other: &Self) -> bool;
}

impl<T: ?Sized> SharedRef for Rc<RefCell<T>> {
    type Target = T;

    fn with_mut<U>(&self, f: impl FnOnce(&mut T) -> U) -> U {
        f(&mut *RefCell::borrow_mut(self))
    }

    fn try_with_mut<U>(&self, f: impl FnOnce(&mut T) -> U) -> Result<U> {
        let mut guard = RefCell::try_borrow_mut(self)
            .map_err(|_| Error::AlreadyBorrowed { target: "RefCell" })?;
        Ok(f(&mut *guard))
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> SharedRef for &RefCell<T> {
    type Target = T;

    fn with_mut<U>(&self, f: impl FnOnce(&mut T) -> U) -> U {
        f(&mut *RefCell::borrow_mut(self))
    }

    fn try_with_mut<U>(&self, f: impl FnOnce(&mut T) -> U) -> Result<U> {
        let mut guard = RefCell::try_borrow_mut(self)
            .map_err(|_| Error::AlreadyBorrowed { target: "RefCell" })?;
        Ok(f(&mut *guard))
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> SharedRef for Arc<Mutex<T>> {
    type Target = T;

    fn with_mut<U>(&self, f: impl FnOnce(&mut T) -> U) -> U {
        let mut guard = self.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }

    fn try_with_mut<U>(&self, f: impl FnOnce(&mut T) -> U) -> Result<U> {
        let mut guard = self
            .lock()
            .map_err(|_| Error::Poisoned { target: "Mutex" })?;
        Ok(f(&mut *guard))
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> SharedRef for Arc<RwLock<T>> {
    type Target = T;

    fn with_mut<U>(&self, f: impl FnOnce(&mut T) -> U) -> U {
        let mut guard = self.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }

    fn try_with_mut<U>(&self, f: impl FnOnce(&mut T) -> U) -> Result<U> {
        let mut guard = self
            .write()
            .map_err(|_| Error::Poisoned { target: "RwLock" })?;
        Ok(f(&mut *guard))
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}
