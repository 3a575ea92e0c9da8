//! Configuration validation tests: everything is rejected at load time,
//! never mid-loop.

use std::io::Write;

use folio_config::{ConfigError, FolioConfig};
use folio_types::ui::SectionId;

#[test]
fn defaults_produce_a_complete_page() {
    let config = FolioConfig::default().into_app_config().unwrap();
    assert!(!config.phrases.is_empty());
    assert!(!config.content.projects.is_empty());
    assert!(!config.content.skill_categories.is_empty());
    assert!(!config.content.about.tabs.is_empty());
}

#[test]
fn per_section_thresholds_stay_in_range() {
    let config = FolioConfig::default().into_app_config().unwrap();
    for section in SectionId::ALL {
        let threshold = config.reveal_for(section).threshold;
        assert!((0.0..=1.0).contains(&threshold), "{section:?}: {threshold}");
    }
}

#[test]
fn config_file_overrides_animation_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        r#"
[animation]
type_delay_ms = 80
stagger_ms = 120
threshold = 0.3

[animation.thresholds]
contact = 0.5
"#
    )
    .unwrap();

    let config = FolioConfig::load_from(&path).unwrap().unwrap();
    let app = config.into_app_config().unwrap();
    assert_eq!(
        app.timing.type_delay(),
        std::time::Duration::from_millis(80)
    );
    assert_eq!(
        app.reveal_for(SectionId::Hero).stagger,
        std::time::Duration::from_millis(120)
    );
    assert!((app.reveal_for(SectionId::About).threshold - 0.3).abs() < f32::EPSILON);
    assert!((app.reveal_for(SectionId::Contact).threshold - 0.5).abs() < f32::EPSILON);
}

#[test]
fn invalid_threshold_fails_at_load() {
    let mut config = FolioConfig::default();
    config.animation.threshold = Some(-0.5);
    assert!(matches!(
        config.into_app_config(),
        Err(ConfigError::Reveal(_))
    ));
}

#[test]
fn zero_typing_delay_fails_at_load() {
    let mut config = FolioConfig::default();
    config.animation.pause_ms = Some(0);
    assert!(matches!(
        config.into_app_config(),
        Err(ConfigError::Typewriter(_))
    ));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[animation\ntype_delay_ms = 80").unwrap();
    assert!(matches!(
        FolioConfig::load_from(&path),
        Err(ConfigError::Parse(_))
    ));
}
