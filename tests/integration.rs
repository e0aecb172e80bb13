// SPDX-License-Identifier: MPL-2.0
use gold_nails::app::persisted_state::AppState;
use gold_nails::config::{self, Config, GalleryConfig, GeneralConfig, SiteConfig, SortOrder};
use gold_nails::gallery::{scan_directory, GalleryIndex, CAPTIONS_FILE};
use gold_nails::i18n::fluent::I18n;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&english, &config_path).expect("Failed to write english config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load english config");
    let i18n_en = I18n::new(None, None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(
        i18n_en.tr_with_args("wait-time-label", &[("time", "10-15 min")]),
        "Current wait: 10-15 min"
    );

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&french, &config_path).expect("Failed to write french config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("book-now"), "Réserver");
}

#[test]
fn test_cli_language_beats_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), None, &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_out_of_range_site_values_are_clamped() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    fs::write(
        &config_path,
        "[site]\nheader_offset_px = -50.0\nwait_time_interval_secs = 999999\n",
    )
    .expect("Failed to write config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(
        loaded.site.header_offset(),
        config::defaults::MIN_HEADER_OFFSET_PX
    );
    assert_eq!(
        loaded.site.wait_time_interval().as_secs(),
        config::defaults::MAX_WAIT_TIME_INTERVAL_SECS
    );
    assert_eq!(loaded.site.phone(), config::defaults::DEFAULT_PHONE);
}

#[test]
fn test_full_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        gallery: GalleryConfig {
            directory: Some(PathBuf::from("/srv/gallery")),
            sort_order: Some(SortOrder::ModifiedDate),
        },
        site: SiteConfig {
            phone: Some("+1 (555) 010-0000".to_string()),
            ..SiteConfig::default()
        },
    };

    config::save_to_path(&config, &config_path).expect("Failed to save config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded, config);
}

#[test]
fn test_state_survives_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut state = AppState {
        loyalty_points: 7,
        ..AppState::default()
    };
    state.remember_gallery_directory(dir.path());
    assert!(state.save_to(Some(dir.path().to_path_buf())).is_none());

    let (loaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.loyalty_points, 7);
    assert_eq!(loaded.last_gallery_directory.as_deref(), Some(dir.path()));
}

#[test]
fn test_scanned_gallery_with_captions() {
    let dir = tempdir().expect("Failed to create temporary directory");
    for name in ["b.png", "a.jpg", "notes.txt"] {
        fs::write(dir.path().join(name), b"").expect("Failed to write file");
    }
    fs::write(
        dir.path().join(CAPTIONS_FILE),
        "[\"b.png\"]\ncaption = \"Ombre\"\ndescription = \"Soft pink fade\"\n",
    )
    .expect("Failed to write captions");

    let thumbnails =
        scan_directory(dir.path(), SortOrder::Alphabetical).expect("Failed to scan directory");
    let list = GalleryIndex::new(&thumbnails).list();

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].title, "Gallery Image 1");
    assert_eq!(list[1].title, "Ombre");
    assert_eq!(list[1].description, "Soft pink fade");
}
