//! Conditional assignment tests


use perform::prelude::*;
use test_fixtures::{record, Record};

#[test]
fn test_assign_none_never_changes_target() {
    let mut target = record("unchanged");
    assign_if_present(&mut target, None);
    assert_eq!(target, record("unchanged"));
}

#[test]
fn test_assign_some_overwrites() {
    let mut target = record("old");
    assign_if_present(&mut target, Some(record("new")));
    assert_eq!(target.text, "new");

    // same value again is still an assignment, not an error
    assign_if_present(&mut target, Some(record("new")));
    assert_eq!(target.text, "new");
}

#[test]
fn test_apply_partial_update() {
    // Only the fields that arrived in the update touch the settings
    #[derive(Default)]
    struct Update {
        title: Option<String>,
        width: Option<u32>,
    }

    let mut title = String::from("Untitled");
    let mut width = 640u32;

    let update = Update {
        width: Some(800),
        ..Default::default()
    };
    assign_if_present(&mut title, update.title);
    width.assign_if_present(update.width);

    assert_eq!(title, "Untitled");
    assert_eq!(width, 800);
}

#[test]
fn test_replace_if_present() {
    let mut target: Record = record("a");
    assert_eq!(replace_if_present(&mut target, None), None);
    let previous = replace_if_present(&mut target, Some(record("b")));
    assert_eq!(previous, Some(record("a")));
    assert_eq!(target, record("b"));
}
