//! Tests for scripted replay.

use crate::config::ViewerConfig;
use crate::message::ViewerEvent;
use crate::replay::{ReplayError, ReplayScript};

const SCENARIO: &str = r#"{
    "images": [
        {"url": "a.jpg", "caption": "Living room"},
        {"url": "b.jpg"},
        {"url": "c.jpg"}
    ],
    "initial_index": 5,
    "steps": [
        {"type": "open"},
        {"type": "pointer", "phase": "down", "id": 1, "x": 100, "y": 100},
        {"type": "pointer", "phase": "down", "id": 2, "x": 200, "y": 100},
        {"type": "pointer", "phase": "move", "id": 2, "x": 300, "y": 100},
        {"type": "pointer", "phase": "up", "id": 2, "x": 300, "y": 100},
        {"type": "pointer", "phase": "up", "id": 1, "x": 100, "y": 100},
        {"type": "pointer", "phase": "down", "id": 3, "x": 50, "y": 50},
        {"type": "pointer", "phase": "move", "id": 3, "x": 65, "y": 40},
        {"type": "pointer", "phase": "up", "id": 3, "x": 65, "y": 40}
    ]
}"#;

#[test]
fn test_scenario_script_zooms_and_pans() {
    let script = ReplayScript::from_json(SCENARIO).unwrap();
    let report = script.run(&ViewerConfig::default());
    let snap = report.snapshot;
    assert_eq!(snap.index, Some(2));
    assert_eq!(snap.zoom.scale, 2.0);
    assert_eq!(snap.zoom.x, 15.0);
    assert_eq!(snap.zoom.y, -10.0);
    assert!(snap.is_zoomed);
    assert_eq!(snap.title, "Living room");
    assert_eq!(report.gesture_updates, 2);
    assert!(report.events.is_empty());
}

#[test]
fn test_key_and_message_steps() {
    let script = ReplayScript::from_json(
        r#"{
            "images": [{"url": "a.jpg"}, {"url": "b.jpg"}, {"url": "c.jpg"}],
            "with_thumbnails": true,
            "steps": [
                {"type": "open", "initial_index": 1},
                {"type": "key", "key": "ArrowRight"},
                {"type": "key", "key": "ArrowRight"},
                {"type": "key", "key": "Shift"},
                {"type": "message", "message": {"action": "go_to", "index": 1}},
                {"type": "message", "message": {"action": "prev"}}
            ]
        }"#,
    )
    .unwrap();
    let report = script.run(&ViewerConfig::default());
    assert_eq!(
        report.events,
        vec![
            ViewerEvent::Navigated { index: 2 },
            ViewerEvent::Navigated { index: 0 },
            ViewerEvent::Navigated { index: 1 },
            ViewerEvent::Navigated { index: 0 },
        ]
    );
    assert!(report.snapshot.show_thumbnails);
    assert!(report.snapshot.thumbnails[0].active);
}

#[test]
fn test_swipe_reports_navigation() {
    let script = ReplayScript::from_json(
        r#"{
            "images": [{"url": "a.jpg"}, {"url": "b.jpg"}],
            "steps": [
                {"type": "open"},
                {"type": "pointer", "phase": "down", "id": 1, "x": 300, "y": 100},
                {"type": "pointer", "phase": "move", "id": 1, "x": 200, "y": 105},
                {"type": "pointer", "phase": "cancel", "id": 1, "x": 200, "y": 105}
            ]
        }"#,
    )
    .unwrap();
    let report = script.run(&ViewerConfig::default());
    assert_eq!(report.events, vec![ViewerEvent::Navigated { index: 1 }]);
    assert_eq!(report.snapshot.counter.as_deref(), Some("2 / 2"));
}

#[test]
fn test_lost_touch_release_does_not_block_swipe() {
    let script = ReplayScript::from_json(
        r#"{
            "images": [{"url": "a.jpg"}, {"url": "b.jpg"}, {"url": "c.jpg"}],
            "initial_index": 1,
            "steps": [
                {"type": "open"},
                {"type": "pointer", "phase": "down", "id": 5, "x": 0, "y": 0, "primary": true},
                {"type": "pointer", "phase": "down", "id": 6, "x": 300, "y": 0, "primary": true},
                {"type": "pointer", "phase": "move", "id": 6, "x": 200, "y": 0},
                {"type": "pointer", "phase": "up", "id": 6, "x": 200, "y": 0}
            ]
        }"#,
    )
    .unwrap();
    let report = script.run(&ViewerConfig::default());
    assert_eq!(report.events, vec![ViewerEvent::Navigated { index: 2 }]);
}

#[test]
fn test_escape_closes_viewer() {
    let script = ReplayScript::from_json(
        r#"{
            "images": [{"url": "a.jpg"}],
            "steps": [
                {"type": "open"},
                {"type": "key", "key": "Escape"},
                {"type": "key", "key": "ArrowRight"}
            ]
        }"#,
    )
    .unwrap();
    let report = script.run(&ViewerConfig::default());
    assert_eq!(report.events, vec![ViewerEvent::Closed]);
    assert!(!report.snapshot.open);
}

#[test]
fn test_set_images_reclamps() {
    let script = ReplayScript::from_json(
        r#"{
            "images": [{"url": "a.jpg"}, {"url": "b.jpg"}, {"url": "c.jpg"}, {"url": "d.jpg"}],
            "initial_index": 3,
            "steps": [
                {"type": "open"},
                {"type": "set_images", "images": [{"url": "x.jpg"}, {"url": "y.jpg"}]}
            ]
        }"#,
    )
    .unwrap();
    let report = script.run(&ViewerConfig::default());
    assert_eq!(report.snapshot.index, Some(1));
    assert_eq!(report.snapshot.len, 2);
}

#[test]
fn test_custom_config_thresholds() {
    let config = ViewerConfig::from_json(
        r#"{"version": 1, "gestures": {"swipe_threshold": 100.0}}"#,
    )
    .unwrap();
    let script = ReplayScript::from_json(
        r#"{
            "images": [{"url": "a.jpg"}, {"url": "b.jpg"}],
            "steps": [
                {"type": "open"},
                {"type": "pointer", "phase": "down", "id": 1, "x": 0, "y": 0},
                {"type": "pointer", "phase": "move", "id": 1, "x": 80, "y": 0},
                {"type": "pointer", "phase": "up", "id": 1, "x": 80, "y": 0}
            ]
        }"#,
    )
    .unwrap();
    let report = script.run(&config);
    assert!(report.events.is_empty());
    assert_eq!(report.snapshot.index, Some(0));
}

#[test]
fn test_invalid_script() {
    assert!(matches!(
        ReplayScript::from_json(r#"{"images": []}"#),
        Err(ReplayError::Json(_))
    ));
    assert!(matches!(
        ReplayScript::from_json(r#"{"images": [], "steps": [{"type": "teleport"}]}"#),
        Err(ReplayError::Json(_))
    ));
}
