//! End-to-end tests for the apply engine against real files.

use std::fs;
use std::path::Path;

use stanza_core::{ApplyOptions, EditRequest, State, apply};
use tempfile::TempDir;

fn set(path: &Path, stanza: &str, attr: &str, values: &[&str]) -> EditRequest {
    EditRequest::new(path, Some(stanza.into()))
        .attr(attr)
        .values(values.iter().copied())
}

#[test]
fn empty_file_gains_stanza_and_attr() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf");
    fs::write(&path, "").unwrap();

    let outcome = apply(
        &set(&path, "drinks", "fav", &["lemonade"]),
        ApplyOptions::default(),
    )
    .unwrap();

    assert!(outcome.changed);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[drinks]\nfav = lemonade\n"
    );
}

#[test]
fn repeated_request_settles_after_one_run() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf");
    fs::write(&path, "[drinks]\nfav = lemonade\n").unwrap();

    let outcome = apply(
        &set(&path, "drinks", "fav", &["lemonade"]),
        ApplyOptions::default(),
    )
    .unwrap();

    assert!(!outcome.changed);
    assert_eq!(outcome.message.as_str(), "OK");
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[drinks]\nfav = lemonade\n"
    );
}

#[test]
fn exclusive_set_prunes_stray_values() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf");
    fs::write(&path, "[drinks]\nfav = lemonade\nfav = cola\n").unwrap();

    let outcome = apply(
        &set(&path, "drinks", "fav", &["lemonade"]),
        ApplyOptions::default(),
    )
    .unwrap();

    assert!(outcome.changed);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[drinks]\nfav = lemonade\n"
    );
}

#[test]
fn exclusive_remove_strips_the_attr() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf");
    fs::write(&path, "[drinks]\nfav = lemonade\n").unwrap();

    let req = set(&path, "drinks", "fav", &[]).state(State::Absent);
    let outcome = apply(&req, ApplyOptions::default()).unwrap();

    assert!(outcome.changed);
    assert_eq!(fs::read_to_string(&path).unwrap(), "[drinks]\n");
}

#[test]
fn non_exclusive_remove_targets_one_value_in_one_stanza() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf");
    fs::write(&path, "[a]\nx=1\n[b]\ny=2\n").unwrap();

    let mut req = set(&path, "b", "y", &["2"]).state(State::Absent);
    req.exclusive = false;
    let outcome = apply(&req, ApplyOptions::default()).unwrap();

    assert!(outcome.changed);
    assert_eq!(fs::read_to_string(&path).unwrap(), "[a]\nx=1\n[b]\n");
}

#[test]
fn applying_twice_reports_changed_then_unchanged() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf");
    fs::write(&path, "[drinks]\nfav = cola\ntemp = cold\n").unwrap();
    let req = set(&path, "drinks", "fav", &["lemonade", "juice"]);

    let first = apply(&req, ApplyOptions::default()).unwrap();
    let after_first = fs::read_to_string(&path).unwrap();
    let second = apply(&req, ApplyOptions::default()).unwrap();

    assert!(first.changed);
    assert!(!second.changed);
    assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
}

#[test]
fn preamble_edit_leaves_stanzas_alone() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf");
    fs::write(&path, "# global settings\n[a]\nx = 1\n").unwrap();

    let req = EditRequest::new(&path, None).attr("loglevel").values(["debug"]);
    let outcome = apply(&req, ApplyOptions::default()).unwrap();

    assert!(outcome.changed);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "# global settings\nloglevel = debug\n[a]\nx = 1\n"
    );
}

#[test]
fn commented_attrs_survive_every_edit() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf");
    fs::write(&path, "[drinks]\n# fav = water\nfav = cola\n").unwrap();

    apply(
        &set(&path, "drinks", "fav", &["lemonade"]),
        ApplyOptions::default(),
    )
    .unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("# fav = water\n"));
    assert!(!text.contains("fav = cola"));
    assert!(text.contains("fav = lemonade\n"));
}

#[test]
fn unterminated_file_is_normalized_even_without_edits() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf");
    fs::write(&path, "[drinks]\nfav = lemonade").unwrap();

    let outcome = apply(
        &set(&path, "drinks", "fav", &["lemonade"]),
        ApplyOptions::default(),
    )
    .unwrap();

    assert!(outcome.changed);
    assert_eq!(outcome.message.as_str(), "OK");
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[drinks]\nfav = lemonade\n"
    );
}

#[test]
fn backup_round_trips_the_original_contents() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf");
    fs::write(&path, "[drinks]\nfav = cola\n").unwrap();

    let mut req = set(&path, "drinks", "fav", &["lemonade"]);
    req.backup = true;
    let outcome = apply(&req, ApplyOptions::default()).unwrap();

    let backup = outcome.backup_path.expect("backup should exist");
    assert_eq!(
        fs::read_to_string(backup).unwrap(),
        "[drinks]\nfav = cola\n"
    );
}

#[test]
fn check_mode_with_diff_previews_the_change() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf");
    fs::write(&path, "[drinks]\nfav = cola\n").unwrap();

    let outcome = apply(
        &set(&path, "drinks", "fav", &["lemonade"]),
        ApplyOptions {
            check_mode: true,
            capture_diff: true,
        },
    )
    .unwrap();

    assert!(outcome.changed);
    let diff = outcome.diff.unwrap();
    assert_eq!(diff.before, "[drinks]\nfav = cola\n");
    assert_eq!(diff.after, "[drinks]\nfav = lemonade\n");
    // Nothing was written
    assert_eq!(fs::read_to_string(&path).unwrap(), "[drinks]\nfav = cola\n");
}

#[test]
fn multi_value_set_is_ordered_and_exact() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf");
    fs::write(&path, "[drinks]\nbeverage = fanta\n").unwrap();

    let req = set(&path, "drinks", "beverage", &["coke", "pepsi"]);
    apply(&req, ApplyOptions::default()).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[drinks]\nbeverage = coke\nbeverage = pepsi\n"
    );
}
