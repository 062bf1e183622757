//! End-to-end behaviour of the configuration store.

use config_store::store::{shallow_merge, ConfigMap, ConfigStore, HistoryAction};
use serde_json::{json, Value};

mod common;
use common::{app_defaults, app_store, map};

#[test]
fn test_walkthrough() {
    let mut store = app_store();
    assert_eq!(store.get_or("theme", Value::Null), json!("light"));

    let current = store
        .update_config(&map(json!({"theme": "dark", "autoSave": false})))
        .clone();
    assert_eq!(Value::Object(current), json!({"theme": "dark", "autoSave": false}));
    assert_eq!(store.history().len(), 1);
    assert_eq!(
        Value::Object(store.history()[0].config.clone()),
        json!({"theme": "light", "autoSave": true})
    );

    let current = store.update_config(&map(json!({"language": "en"}))).clone();
    assert_eq!(
        Value::Object(current),
        json!({"theme": "dark", "autoSave": false, "language": "en"})
    );

    let current = store.reset_to_default().clone();
    assert_eq!(Value::Object(current), json!({"theme": "light", "autoSave": true}));
    assert_eq!(store.history().len(), 3);
    assert_eq!(store.history()[2].action, Some(HistoryAction::Reset));

    assert_eq!(store.get_or("missing", json!("fallback")), json!("fallback"));
}

#[test]
fn test_current_equals_fold_of_updates() {
    let updates = vec![
        map(json!({"theme": "dark"})),
        map(json!({"language": "en", "fontSize": 12})),
        map(json!({"fontSize": 14, "editor": {"tabs": 2}})),
        map(json!({})),
        map(json!({"editor": {"wrap": true}, "theme": null})),
    ];

    let mut store = app_store();
    let mut expected = app_defaults();
    for update in &updates {
        store.update_config(update);
        expected = shallow_merge(&expected, update);
    }

    assert_eq!(store.current_config(), &expected);
    assert_eq!(
        Value::Object(expected),
        json!({
            "theme": null,
            "autoSave": true,
            "language": "en",
            "fontSize": 14,
            "editor": {"wrap": true}
        })
    );
}

#[test]
fn test_each_operation_appends_pre_operation_snapshot() {
    let mut store = app_store();
    let operations: Vec<Option<ConfigMap>> = vec![
        Some(map(json!({"theme": "dark"}))),
        None,
        Some(map(json!({"language": "fr"}))),
        Some(map(json!({"language": "de"}))),
        None,
    ];

    for (i, op) in operations.into_iter().enumerate() {
        let before = store.snapshot();
        match op {
            Some(update) => {
                store.update_config(&update);
            }
            None => {
                store.reset_to_default();
            }
        }

        assert_eq!(store.history().len(), i + 1);
        let entry = store.history().last().unwrap();
        assert_eq!(entry.config, before);
        assert_ne!(entry.timestamp, std::time::UNIX_EPOCH);
    }

    let tags: Vec<_> = store.history().iter().map(|e| e.is_reset()).collect();
    assert_eq!(tags, vec![false, true, false, false, true]);
}

#[test]
fn test_reset_ignores_prior_updates() {
    let mut store = app_store();
    for i in 0..5 {
        store.update_config(&map(json!({"theme": format!("custom-{}", i), "extra": i})));
        store.reset_to_default();
        assert_eq!(store.current_config(), &app_defaults());
    }
    assert_eq!(store.default_config(), &app_defaults());
}

#[test]
fn test_snapshots_isolated_from_live_state() {
    let mut store = app_store();
    store.update_config(&map(json!({"theme": "dark"})));
    store.update_config(&map(json!({"theme": "solarized"})));

    // Mutate an owned copy of a stored snapshot
    let mut copy = store.history()[0].config.clone();
    copy.insert("theme".into(), json!("tampered"));

    assert_eq!(store.history()[0].config["theme"], json!("light"));
    assert_eq!(store.history()[1].config["theme"], json!("dark"));
    assert_eq!(store.get("theme"), Some(&json!("solarized")));

    // Later updates don't reach earlier snapshots either
    store.update_config(&map(json!({"theme": "contrast"})));
    assert_eq!(store.history()[1].config["theme"], json!("dark"));
}

#[test]
fn test_caller_default_is_copied() {
    let mut defaults = app_defaults();
    let mut store = ConfigStore::new("copy", defaults.clone());

    defaults.insert("theme".into(), json!("changed"));
    store.update_config(&map(json!({"theme": "dark"})));
    store.reset_to_default();

    assert_eq!(store.get("theme"), Some(&json!("light")));
}

#[test]
fn test_get_falsy_values_present() {
    let mut store = ConfigStore::named("falsy");
    store.update_config(&map(json!({
        "nothing": null,
        "zero": 0,
        "off": false,
        "blank": "",
        "none": []
    })));

    for key in ["nothing", "zero", "off", "blank", "none"] {
        assert!(store.get(key).is_some(), "{} should be present", key);
        assert_ne!(store.get_or(key, json!("fallback")), json!("fallback"));
    }
    assert_eq!(store.get_or("absent", json!("fallback")), json!("fallback"));
}

#[test]
fn test_rejected_value_leaves_store_untouched() {
    let mut store = app_store();

    for bad in [json!(null), json!(true), json!("theme"), json!([["theme", "dark"]])] {
        assert!(store.update_from_value(bad).is_err());
    }

    assert!(store.history().is_empty());
    assert_eq!(store.current_config(), &app_defaults());
}
