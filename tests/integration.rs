// SPDX-License-Identifier: MPL-2.0
use core_bci_site::config::{self, Config, DEFAULT_MOBILE_BREAKPOINT, MAX_TOAST_AUTO_DISMISS_MS};
use core_bci_site::i18n::fluent::I18n;
use core_bci_site::ui::theming::ThemeMode;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("contact-submit"), "Send Message");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_language_wins_over_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn every_locale_translates_the_page_keys() {
    let keys = [
        "window-title",
        "nav-home",
        "nav-contact",
        "hero-cta-services",
        "hero-cta-contact",
        "contact-submit",
        "contact-sending",
        "contact-success",
        "contact-error-email-invalid",
        "notification-config-load-error",
    ];

    for lang in ["en-US", "fr"] {
        let i18n = I18n::new(Some(lang.to_string()), &Config::default());
        for key in keys {
            let text = i18n.tr(key);
            assert!(!text.starts_with("MISSING"), "{lang} lacks {key}");
        }
    }
}

#[test]
fn settings_round_trip_through_disk() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("nested").join("settings.toml");

    let mut original = Config::default();
    original.general.theme_mode = ThemeMode::Dark;
    original.notifications.auto_dismiss_ms = Some(8_000);
    original.contact.simulated_delay_ms = Some(500);
    original.scroll.mobile_breakpoint = Some(900.0);

    config::save_to_path(&original, &path).expect("Failed to save config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");

    assert_eq!(loaded, original);
    assert_eq!(loaded.notifications.auto_dismiss(), Duration::from_secs(8));
    assert_eq!(loaded.contact.simulated_delay(), Duration::from_millis(500));
}

#[test]
fn partial_file_keeps_defaults_for_missing_sections() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[general]\ntheme_mode = \"light\"\n").expect("write");

    let loaded = config::load_from_path(&path).expect("Failed to load config");

    assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    assert_eq!(loaded.scroll.mobile_breakpoint(), DEFAULT_MOBILE_BREAKPOINT);
    assert_eq!(loaded.contact.simulated_delay(), Duration::from_secs(2));
}

#[test]
fn out_of_range_values_are_clamped_when_read() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[notifications]\nauto_dismiss_ms = 999999999\n").expect("write");

    let loaded = config::load_from_path(&path).expect("Failed to load config");

    assert_eq!(
        loaded.notifications.auto_dismiss(),
        Duration::from_millis(MAX_TOAST_AUTO_DISMISS_MS)
    );
}

#[test]
fn unreadable_settings_fall_back_with_a_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "general = [broken").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn missing_settings_file_is_not_an_error() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert!(warning.is_none());
}
