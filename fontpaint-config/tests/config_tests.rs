use fontpaint_config::{
    ConfigError, KerningStrategy, PainterConfig, RenderBounds, TextAlign, WrapMode,
};

#[test]
fn test_config_defaults() {
    let config = PainterConfig::default();
    assert_eq!(config.font, None);
    assert_eq!(config.font_size, 24.0);
    assert_eq!(config.line_height, 1.0);
    assert_eq!(config.letter_spacing, 0.0);
    assert_eq!(config.align, TextAlign::Left);
    assert_eq!(config.wrap_mode, WrapMode::BreakWhitespace);
    assert_eq!(config.bounds, None);
    assert!(!config.exact_fit);
    assert_eq!(config.kerning_strategy, KerningStrategy::RangeTable);
    assert_eq!(config.parser_extensions, vec![".svg".to_string()]);
}

#[test]
fn test_config_partial_yaml() {
    let yaml = r#"
font: fonts/display.svg
font_size: 64
align: right
bounds:
  type: fixed
  width: 480
kerning_strategy: direct_pair
"#;
    let config: PainterConfig = serde_yaml_ng::from_str(yaml).unwrap();
    assert_eq!(config.font.as_deref(), Some("fonts/display.svg"));
    assert_eq!(config.font_size, 64.0);
    assert_eq!(config.align, TextAlign::Right);
    assert_eq!(config.bounds, Some(RenderBounds::fixed(480.0)));
    assert_eq!(config.kerning_strategy, KerningStrategy::DirectPair);
    // unspecified fields fall back to defaults
    assert_eq!(config.line_height, 1.0);
    assert_eq!(config.wrap_mode, WrapMode::BreakWhitespace);
}

#[test]
fn test_config_intrinsic_bounds_yaml() {
    let config: PainterConfig = 
        serde_yaml_ng::from_str("bounds:\n  type: intrinsic\nwrap_mode: none\n").unwrap();
    assert_eq!(config.bounds, Some(RenderBounds::Intrinsic));
    assert_eq!(config.wrap_mode, WrapMode::None);
}

#[test]
fn test_config_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("fontpaint.yaml");

    let config = PainterConfig::new()
        .with_font("test.svg")
        .with_font_size(36.0)
        .with_bounds(RenderBounds::fixed(200.0))
        .with_align(TextAlign::Center);
    config.save(&path).unwrap();
    assert!(!path.with_extension("yaml.tmp").exists());
    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.contains("type: fixed"));

    let loaded = PainterConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_load_creates_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fontpaint.yaml");

    let config = PainterConfig::load(&path).unwrap();
    assert_eq!(config, PainterConfig::default());
    assert!(path.exists());
}

#[test]
fn test_config_load_invalid_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fontpaint.yaml");
    std::fs::write(&path, "font_size: [not, a, number]\n").unwrap();

    let err = PainterConfig::load(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Parse(_))
    ));
}

#[test]
fn test_config_load_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fontpaint.yaml");
    std::fs::write(&path, "font_size: -3\n").unwrap();

    let err = PainterConfig::load(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Validation(_))
    ));
}
