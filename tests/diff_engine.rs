use std::error::Error;

use serde_json::{json, Value};
use watchdiff::diff::{diff, ChangeKind, PathSegment};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn diff_of_identical_values_is_empty() -> TestResult {
    let v = json!({
        "name": "web",
        "spec": { "replicas": 3, "ports": [80, 443] },
        "labels": null
    });

    assert!(diff(&v, &v)?.is_empty());
    Ok(())
}

#[test]
fn update_then_create_ordered_by_key() -> TestResult {
    let old = json!({"a": 1});
    let new = json!({"a": 2, "b": 3});

    let changelog = diff(&old, &new)?;
    assert_eq!(changelog.len(), 2);

    assert_eq!(changelog[0].kind, ChangeKind::Update);
    assert_eq!(changelog[0].path, vec![PathSegment::from("a")]);
    assert_eq!(changelog[0].from, Some(json!(1)));
    assert_eq!(changelog[0].to, Some(json!(2)));

    assert_eq!(changelog[1].kind, ChangeKind::Create);
    assert_eq!(changelog[1].path, vec![PathSegment::from("b")]);
    assert_eq!(changelog[1].from, None);
    assert_eq!(changelog[1].to, Some(json!(3)));

    Ok(())
}

#[test]
fn removed_key_yields_delete_with_old_value() -> TestResult {
    let old = json!({"a": 1, "b": {"c": true}});
    let new = json!({"a": 1});

    let changelog = diff(&old, &new)?;
    assert_eq!(changelog.len(), 1);
    assert_eq!(changelog[0].kind, ChangeKind::Delete);
    assert_eq!(changelog[0].path, vec![PathSegment::from("b")]);
    assert_eq!(changelog[0].from, Some(json!({"c": true})));
    assert_eq!(changelog[0].to, None);

    Ok(())
}

#[test]
fn nested_objects_recurse_with_full_paths() -> TestResult {
    let old = json!({"spec": {"replicas": 3}});
    let new = json!({"spec": {"replicas": 5}});

    let changelog = diff(&old, &new)?;
    assert_eq!(changelog.len(), 1);
    assert_eq!(changelog[0].kind, ChangeKind::Update);
    assert_eq!(
        changelog[0].path,
        vec![PathSegment::from("spec"), PathSegment::from("replicas")]
    );

    Ok(())
}

#[test]
fn arrays_compare_by_position() -> TestResult {
    let old = json!([1, 2, 3]);
    let new = json!([1, 5]);

    let changelog = diff(&old, &new)?;
    assert_eq!(changelog.len(), 2);

    assert_eq!(changelog[0].kind, ChangeKind::Update);
    assert_eq!(changelog[0].path, vec![PathSegment::from(1usize)]);
    assert_eq!(changelog[0].from, Some(json!(2)));
    assert_eq!(changelog[0].to, Some(json!(5)));

    assert_eq!(changelog[1].kind, ChangeKind::Delete);
    assert_eq!(changelog[1].path, vec![PathSegment::from(2usize)]);
    assert_eq!(changelog[1].from, Some(json!(3)));

    Ok(())
}

#[test]
fn longer_new_array_yields_creates_for_extra_positions() -> TestResult {
    let old = json!({"ports": [80]});
    let new = json!({"ports": [80, 443]});

    let changelog = diff(&old, &new)?;
    assert_eq!(changelog.len(), 1);
    assert_eq!(changelog[0].kind, ChangeKind::Create);
    assert_eq!(
        changelog[0].path,
        vec![PathSegment::from("ports"), PathSegment::from(1usize)]
    );
    assert_eq!(changelog[0].to, Some(json!(443)));

    Ok(())
}

#[test]
fn number_and_string_are_never_equal() -> TestResult {
    let changelog = diff(&json!({"v": 1}), &json!({"v": "1"}))?;
    assert_eq!(changelog.len(), 1);
    assert_eq!(changelog[0].kind, ChangeKind::Update);
    Ok(())
}

#[test]
fn kind_mismatch_is_a_single_update() -> TestResult {
    let old = json!({"a": {"x": 1, "y": 2}});
    let new = json!({"a": [1, 2]});

    let changelog = diff(&old, &new)?;
    assert_eq!(changelog.len(), 1);
    assert_eq!(changelog[0].kind, ChangeKind::Update);
    assert_eq!(changelog[0].path, vec![PathSegment::from("a")]);
    assert_eq!(changelog[0].from, Some(json!({"x": 1, "y": 2})));
    assert_eq!(changelog[0].to, Some(json!([1, 2])));

    Ok(())
}

#[test]
fn root_scalar_update_has_empty_path() -> TestResult {
    let changelog = diff(&json!(1), &json!(2))?;
    assert_eq!(changelog.len(), 1);
    assert!(changelog[0].path.is_empty());
    Ok(())
}

#[test]
fn sibling_changes_come_out_in_lexicographic_key_order() -> TestResult {
    let old = json!({"b": 1, "d": 4, "a": 0});
    let new = json!({"b": 2, "c": 3, "a": 0});

    let changelog = diff(&old, &new)?;
    let keys: Vec<String> = changelog
        .iter()
        .map(|c| c.path[0].to_string())
        .collect();
    assert_eq!(keys, vec!["b", "c", "d"]);

    Ok(())
}

#[test]
fn pathological_nesting_fails_whole_instead_of_partially() -> TestResult {
    let mut deep = json!(1);
    for _ in 0..600 {
        deep = Value::Object(std::iter::once(("k".to_string(), deep)).collect());
    }

    // Both sides must be deep or the kind-mismatch arm short-circuits the
    // recursion into a single Update.
    assert!(diff(&deep, &deep).is_err());
    Ok(())
}
