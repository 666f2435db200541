// ==========================================
// ConfigLoader 集成测试
// ==========================================
// 测试目标: 从文件/字符串加载站点配置的完整流程
// ==========================================


use qiye_docs_config::config::ConfigLoader;
use qiye_docs_config::{logging, ConfigError};
use test_helpers::{
    write_config_file, SAMPLE_CONFIG, SAMPLE_CONFIG_WITH_FOOTER, SAMPLE_FOOTER,
};

#[test]
fn test_load_sample_config_from_file() {
    logging::init_test();
    let file = write_config_file(SAMPLE_CONFIG).expect("Failed to write config");

    let record = ConfigLoader::load_from_path(file.path()).expect("Sample config should load");

    assert_eq!(record.theme().name(), "七夜");
    assert_eq!(record.theme().logo(), "/logo.png");
    assert!(record.theme().footer().is_none());

    // 两个语言，顺序与文件一致
    let locales = record.locales();
    assert_eq!(locales.len(), 2, "Should expose exactly two locales");
    assert_eq!(locales[0].id(), "zh-CN");
    assert_eq!(locales[0].name(), "中文");
    assert_eq!(locales[1].id(), "en-US");
    assert_eq!(locales[1].name(), "EN");
    assert_eq!(record.default_locale().id(), "zh-CN");
}

#[test]
fn test_sample_config_matches_builtin() {
    let from_str = ConfigLoader::load_from_str(SAMPLE_CONFIG).unwrap();
    let builtin = ConfigLoader::builtin().unwrap();
    assert_eq!(from_str, builtin);
}

#[test]
fn test_footer_preserved_verbatim() {
    let record = ConfigLoader::load_from_str(SAMPLE_CONFIG_WITH_FOOTER).unwrap();
    assert_eq!(record.theme().footer(), Some(SAMPLE_FOOTER));
}

#[test]
fn test_footer_not_escaped_on_export() {
    let record = ConfigLoader::load_from_str(SAMPLE_CONFIG_WITH_FOOTER).unwrap();
    let exported = record.to_json_pretty().unwrap();

    assert!(exported.contains("<a href="), "Markup should not be HTML-escaped");
    assert!(exported.contains("©"));

    // 导出结果可以再次加载，且内容不变
    let reloaded = ConfigLoader::load_from_str(&exported).unwrap();
    assert_eq!(reloaded, record);
}

#[test]
fn test_other_site_options_are_ignored() {
    let record = ConfigLoader::load_from_str(
        r#"{
          "outputPath": "docs-dist",
          "themeConfig": { "name": "七夜", "logo": "/logo.png", "nav": [{ "title": "指南" }] },
          "locales": [{ "id": "zh-CN", "name": "中文" }]
        }"#,
    )
    .expect("Unknown options should be ignored");
    assert_eq!(record.locale_ids(), vec!["zh-CN"]);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".dumirc.json");

    let err = ConfigLoader::load_from_path(&path).unwrap_err();
    match err {
        ConfigError::Io { path: p, source } => {
            assert_eq!(p, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_malformed_file_is_parse_error() {
    let file = write_config_file("export default { themeConfig: {} }").unwrap();
    let err = ConfigLoader::load_from_path(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "Got {:?}", err);
}

#[test]
fn test_invalid_file_is_validation_error() {
    let file = write_config_file(
        r#"{"themeConfig":{"name":"七夜"},"locales":[{"id":"zh-CN","name":"中文"}]}"#,
    )
    .unwrap();
    let err = ConfigLoader::load_from_path(file.path()).unwrap_err();
    let validation = err.as_validation().expect("Should be a validation error");
    assert!(validation.has_violation_for("themeConfig.logo"));
}
