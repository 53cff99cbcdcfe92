//! Apply-and-return tests (reference flow, copy flow, optional variants)


use perform::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::thread;
use test_fixtures::{record, shared_label, Label, Point, Record};

#[test]
fn test_reference_scenario_original_to_new() {
    let label = shared_label("Original");

    let returned = perform_after_reference(Rc::clone(&label), |l| l.text = "New".to_string());

    // Both bindings report the mutation and are the same object
    assert_eq!(returned.borrow().text, "New");
    assert_eq!(label.borrow().text, "New");
    assert!(Rc::ptr_eq(&returned, &label));
}

#[test]
fn test_reference_mutation_visible_to_every_alias() {
    let label = shared_label("a");
    let aliases: Vec<_> = (0..3).map(|_| Rc::clone(&label)).collect();

    let _ = perform_after_reference(Rc::clone(&label), |l| l.font_size = 20);

    for alias in &aliases {
        assert_eq!(alias.borrow().font_size, 20);
    }
}

#[test]
fn test_reference_flow_across_threads() {
    let counter = Arc::new(Mutex::new(0u64));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let c = Arc::clone(&counter);
            thread::spawn(move || {
                for _ in 0..100 {
                    let _ = perform_after_reference(Arc::clone(&c), |n| *n += 1);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().expect("worker panicked");
    }
    assert_eq!(*counter.lock().expect("poisoned"), 400);
}

#[test]
fn test_copy_scenario_original_to_new() {
    let original = record("Original");

    let changed = perform_after_copy(&original, |r| r.text = "New".to_string());

    assert_eq!(changed.text, "New");
    assert_eq!(original.text, "Original");
}

#[test]
fn test_copy_reflects_exactly_the_mutations() {
    let origin = Point { x: 1, y: 2 };
    let moved = perform_after_copy(&origin, |p| p.x += 10);

    assert_eq!(origin, Point { x: 1, y: 2 });
    assert_eq!(moved, Point { x: 11, y: 2 });

    // Copy types keep working through the method spelling too
    let again = moved.perform_after_copy(|p| p.y = -1);
    assert_eq!((moved.y, again.y), (2, -1));
}

#[test]
fn test_reference_if_present() {
    let calls = Cell::new(0);

    let absent = perform_after_reference_if_present(None::<Rc<RefCell<Label>>>, |l| {
        calls.set(calls.get() + 1);
        l.text.clear();
    });
    assert!(absent.is_none());
    assert_eq!(calls.get(), 0);

    let label = shared_label("x");
    let present = perform_after_reference_if_present(Some(Rc::clone(&label)), |l| {
        calls.set(calls.get() + 1);
        l.text = "y".to_string();
    })
    .expect("present operand must stay present");
    assert_eq!(calls.get(), 1);
    assert!(Rc::ptr_eq(&present, &label));
    assert_eq!(label.borrow().text, "y");
}

#[test]
fn test_copy_if_present() {
    let calls = Cell::new(0);
    let maybe: Option<Record> = None;

    assert_eq!(
        perform_after_copy_if_present(maybe.as_ref(), |_| calls.set(calls.get() + 1)),
        None
    );
    assert_eq!(calls.get(), 0);

    let maybe = Some(record("a"));
    let out = perform_after_copy_if_present(maybe.as_ref(), |r| r.tags.push("t".into()));
    assert_eq!(out.map(|r| r.tags), Some(vec!["t".to_string()]));
    // wrapped original untouched
    assert_eq!(maybe, Some(record("a")));
}

#[test]
fn test_panicking_procedure_propagates() {
    let label = shared_label("a");
    let alias = Rc::clone(&label);
    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
        perform_after_reference(alias, |_| panic!("boom"))
    }));
    assert!(outcome.is_err());
    // RefCell borrow guard was released during unwinding
    assert_eq!(label.borrow().text, "a");
}

#[test]
fn test_try_variants_return_caller_error() {
    #[derive(Debug, PartialEq)]
    struct Invalid(&'static str);

    let r = record("a");
    let out = try_perform_after_copy(&r, |r| {
        if r.text.is_empty() {
            Ok(())
        } else {
            Err(Invalid("not empty"))
        }
    });
    assert_eq!(out, Err(Invalid("not empty")));

    let out = try_perform_after_copy_if_present(Some(&r), |r| {
        r.text.push('!');
        Ok::<(), Invalid>(())
    });
    assert_eq!(out.map(|o| o.map(|r| r.text)), Ok(Some("a!".to_string())));
}

#[test]
fn test_checked_reference_on_busy_handle() {
    let label = shared_label("a");
    let _reader = label.borrow();

    let err = checked_perform_after_reference(Rc::clone(&label), |l| l.font_size = 1)
        .expect_err("handle is borrowed");
    assert!(matches!(err, Error::AlreadyBorrowed { .. }));
    assert_eq!(err.to_string(), "shared target 'RefCell' is already borrowed");
}
