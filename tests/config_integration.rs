// SPDX-License-Identifier: MPL-2.0
//! Configuration files driving toast and backend settings.

use gobarber::app::config::{self, Config, StackOrder, MAX_TOAST_DURATION_MS};
use gobarber::ui::notifications::{Manager, ToastContent};
use gobarber::ui::theming::ThemeMode;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn settings_file_configures_toast_manager() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[toast]\nduration_ms = 5000\nstack_order = \"newest-first\"\n",
    )
    .expect("Failed to write settings file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let settings = config.toast_settings();
    assert_eq!(settings.duration, Duration::from_millis(5000));

    let mut manager = Manager::new(settings);
    assert_eq!(manager.duration(), Duration::from_millis(5000));
    let _ = manager.add_toast(ToastContent::info("a"));
    let _ = manager.add_toast(ToastContent::info("b"));
    assert_eq!(manager.stack_order(), StackOrder::NewestFirst);
    assert_eq!(manager.visible().next().map(|t| t.title()), Some("b"));
}

#[test]
fn out_of_range_duration_is_clamped() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[toast]\nduration_ms = 999999\n").expect("Failed to write settings file");

    let config = config::load_from_path(&path).expect("Failed to load config");

    assert_eq!(
        config.toast_settings().duration,
        Duration::from_millis(MAX_TOAST_DURATION_MS)
    );
}

#[test]
fn saved_config_round_trips_through_disk() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut cfg = Config::default();
    cfg.general.theme_mode = ThemeMode::Dark;
    cfg.api.base_url = "https://api.example.com".to_string();

    config::save_with_override(&cfg, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded, cfg);
    let content = fs::read_to_string(dir.path().join("settings.toml")).unwrap();
    assert!(content.contains("[general]"));
    assert!(content.contains("[api]"));
}

#[test]
fn broken_file_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[toast\n").unwrap();

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert!(warning.is_some());
}
