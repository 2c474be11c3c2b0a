//! Cross-crate checks: the ordered map's wire contract, the changelog
//! pipeline from commit subjects to Markdown, and the log collector under
//! concurrent writers.

use std::io::Write;

use chrono::Local;
use ordmap::{OrderedMap, OrderedMapError};
use serde_json::{Value, json};
use testlog::LogAgg;

#[test]
fn ordered_map_json_round_trip_is_idempotent() {
    let mut map = OrderedMap::new();
    map.insert("zulu".to_string(), json!("last name, first key"));
    map.insert("alpha".to_string(), json!(1.5));
    map.insert("mike".to_string(), json!(null));
    map.insert("bravo".to_string(), json!({"nested": [1, 2, 3]}));

    let encoded = map.to_json().unwrap();
    assert!(encoded.starts_with(r#"{"zulu":"#));

    let mut current = encoded.clone();
    for _ in 0..50 {
        let mut decoded: OrderedMap<String, Value> = OrderedMap::new();
        decoded.from_json(&current).unwrap();
        current = decoded.to_json().unwrap();
        assert_eq!(current, encoded);
    }
}

#[test]
fn ordered_map_insertion_order_survives_updates() {
    let mut map = OrderedMap::new();
    for key in ["one", "two", "three"] {
        map.insert(key.to_string(), json!(0));
    }
    for round in 1..=3 {
        map.insert("two".to_string(), json!(round));
        map.insert("one".to_string(), json!(round));
    }

    let keys: Vec<_> = map.keys().cloned().collect();
    assert_eq!(keys, ["one", "two", "three"]);
    assert_eq!(map.get("one"), Some(&json!(3)));
}

#[test]
fn ordered_map_with_integer_keys_refuses_json() {
    let mut map = OrderedMap::new();
    map.insert(1, json!("value"));

    assert!(matches!(
        map.to_json().unwrap_err(),
        OrderedMapError::KeysMustBeStrings
    ));
}

#[test]
fn changelog_renders_the_expected_document() {
    let commits = ["feat: add X", "fix(api): handle Y", "chore: ignore"];
    let entry = changelog::render_changelog("v1.3.0", &commits, &[], &[]);

    let today = Local::now().format("%Y-%m-%d");
    assert!(entry.starts_with(&format!("## [1.3.0] - {today}\n")));
    assert!(entry.contains("### Added\n\n- add X\n"));
    assert!(entry.contains("### Fixed\n\n- **api**: handle Y\n"));
    assert!(!entry.contains("chore"));
    assert!(!entry.contains("ignore"));
}

#[test]
fn changelog_duplicate_suppression_and_skip_filters() {
    let commits = [
        "fix: handle Y",
        "fix: handle Y",
        "feat(internal): hidden",
        "ci: also hidden",
    ];
    let entry = changelog::render_changelog("v1.3.0", &commits, &["ci"], &["internal"]);

    assert_eq!(entry.matches("handle Y").count(), 1);
    assert!(!entry.contains("hidden"));
}

#[test]
fn next_version_matches_the_release_flow() {
    assert_eq!(changelog::next_version("v1.3.7", false).unwrap(), "v1.4.0");
    assert_eq!(changelog::next_version("v1.3.7", true).unwrap(), "v1.3.8");
    assert!(changelog::next_version("not-a-version", false).is_err());
}

#[test]
fn log_collector_survives_concurrent_json_writers() {
    let agg = LogAgg::new();

    std::thread::scope(|scope| {
        for worker in 0..4 {
            let mut writer = &agg;
            scope.spawn(move || {
                for i in 0..25 {
                    writeln!(
                        writer,
                        r#"{{"worker":{worker},"seq":{i},"msg":"tick"}}"#
                    )
                    .unwrap();
                }
            });
        }
    });

    assert_eq!(agg.len(), 100);
    let decoded = agg.find_json(r#""worker":3,"seq":24"#).unwrap();
    assert_eq!(decoded["msg"], "tick");

    agg.reset();
    assert!(agg.is_empty());
}

#[test]
fn formatted_json_is_stable_for_ordered_maps() {
    let mut map = OrderedMap::new();
    map.insert("b".to_string(), json!(2));
    map.insert("a".to_string(), json!(1));

    // the serde impl keeps insertion order, so pretty output does too
    assert_eq!(util::json::format(&map), "{\n  \"b\": 2,\n  \"a\": 1\n}");
}
