use wifimon::core::wifi::HotspotRecord;
use wifimon::ui::{panel_to_string, render_wifi_panel};

fn hotspot(ssid: &str, quality: &str, encryption: Option<&str>) -> HotspotRecord {
    HotspotRecord {
        ssid: ssid.to_string(),
        quality: quality.to_string(),
        encrypted: encryption.is_some(),
        encryption_type: encryption.map(str::to_string),
        ..Default::default()
    }
}

#[test]
fn test_panel_text_layout() {
    let snapshot = vec![
        hotspot("HomeNet", "80", None),
        hotspot("CafeWifi", "55", Some("WPA2")),
    ];

    let items = render_wifi_panel(&snapshot, None, true, true);
    let text = panel_to_string(&items);

    let expected = "\
WIFI            Quality
CafeWifi WPA2        55
HomeNet              80
";
    assert_eq!(text, expected);
}

#[test]
fn test_panel_wide_layout() {
    let snapshot = vec![hotspot("HomeNet", "80", None)];

    let items = render_wifi_panel(&snapshot, Some(30), true, true);
    let text = panel_to_string(&items);

    // Name column is 25 wide, so every body line is 25 + 7 columns
    let body = text.lines().nth(1).unwrap();
    assert_eq!(body.len(), 32);
    assert!(body.starts_with("HomeNet "));
    assert!(body.ends_with("     80"));
}

#[test]
fn test_panel_guards_produce_no_output() {
    let snapshot = vec![hotspot("HomeNet", "80", None)];

    assert!(render_wifi_panel(&[], None, true, true).is_empty());
    assert!(render_wifi_panel(&snapshot, None, false, true).is_empty());
    assert!(render_wifi_panel(&snapshot, None, true, false).is_empty());
}

#[test]
fn test_long_names_are_left_truncated() {
    let snapshot = vec![hotspot(
        "a-very-long-network-name-from-somewhere",
        "42",
        None,
    )];

    let items = render_wifi_panel(&snapshot, None, true, true);
    let text = panel_to_string(&items);
    let body = text.lines().nth(1).unwrap();

    assert!(body.starts_with('_'));
    // Tail of the name survives the cut
    assert!(body.starts_with("_-from-somewhere"));
}
