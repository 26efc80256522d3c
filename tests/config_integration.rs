// SPDX-License-Identifier: MPL-2.0
use std::sync::Arc;
use toast_queue::application::port::NoEffects;
use toast_queue::config::{self, Position, ToastConfig};
use toast_queue::infrastructure::ManualClock;
use toast_queue::notifications::{ToastOptions, ToastService};
use tempfile::tempdir;

#[test]
fn test_capacity_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("toasts.toml");

    let initial_config = ToastConfig {
        max_notifications: 2,
        position: Position::BottomRight,
        ..ToastConfig::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load config from path");
    assert_eq!(loaded.position, Position::BottomRight);

    let service = ToastService::with_ports(loaded, Arc::new(ManualClock::new()), Arc::new(NoEffects));
    for title in ["a", "b", "c", "d"] {
        service.info(title, ToastOptions::new()).unwrap();
    }
    assert_eq!(service.len(), 2);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_durations_from_config_apply_to_producers() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("toasts.toml");
    std::fs::write(
        &path,
        "default_duration_ms = 2500\nerror_duration_ms = 9000\n",
    )
    .expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let service = ToastService::with_ports(loaded, Arc::new(ManualClock::new()), Arc::new(NoEffects));
    let ok = service.success("ok", ToastOptions::new()).unwrap();
    let bad = service.error("bad", ToastOptions::new()).unwrap();

    assert_eq!(service.get(&ok).unwrap().duration_ms(), Some(2500));
    assert_eq!(service.get(&bad).unwrap().duration_ms(), Some(9000));
}

#[test]
fn test_out_of_range_capacity_is_sanitized_by_service() {
    let config = ToastConfig {
        max_notifications: 0,
        ..ToastConfig::default()
    };
    let service = ToastService::with_ports(config, Arc::new(ManualClock::new()), Arc::new(NoEffects));
    assert_eq!(service.config().max_notifications, 1);

    service.info("one", ToastOptions::new()).unwrap();
    service.info("two", ToastOptions::new()).unwrap();
    assert_eq!(service.len(), 1);
}
