use tempfile::TempDir;
use wifimon::core::config::Config;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.disable_wifi);
    assert!(config.hidden_interfaces.is_empty());
    assert_eq!(config.refresh_ms, 2000);
}

#[test]
fn test_config_hide_and_unhide() {
    let mut config = Config::default();
    config.hide_interface("docker*".to_string());
    config.hide_interface("eth0".to_string());

    assert!(config.is_hide("docker0"));
    assert!(config.is_hide("eth0"));
    assert!(!config.is_hide("wlan0"));

    assert!(config.unhide_interface("eth0"));
    assert!(!config.is_hide("eth0"));
}

#[test]
fn test_config_json_roundtrip() {
    let config = Config {
        disable_wifi: true,
        hidden_interfaces: vec!["eth0".to_string(), "veth*".to_string()],
        refresh_ms: 5000,
    };

    let data = serde_json::to_string(&config).unwrap();
    let loaded: Config = serde_json::from_str(&data).unwrap();

    assert!(loaded.disable_wifi);
    assert_eq!(loaded.hidden_interfaces, config.hidden_interfaces);
    assert_eq!(loaded.refresh_ms, 5000);
}

#[test]
fn test_config_missing_fields_use_defaults() {
    let loaded: Config = serde_json::from_str("{}").unwrap();

    assert!(!loaded.disable_wifi);
    assert_eq!(loaded.refresh_ms, 2000);
}

#[test]
fn test_config_save_and_load() {
    // Redirect the config directory into a temp dir
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

    let mut config = Config::default();
    config.hide_interface("eth0".to_string());
    config.save().unwrap();

    let loaded = Config::load().unwrap();
    assert!(loaded.is_hide("eth0"));
}
