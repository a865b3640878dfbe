// ==========================================
// 应用设置集成测试
// ==========================================
// 测试目标: 缺失文件回退默认 / 修改落盘 / 重载一致
// ==========================================

use jewelry_production_board::config::{AppSettings, SettingsManager, SETTINGS_FILE_NAME};
use jewelry_production_board::domain::types::SortOrder;

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let manager = SettingsManager::load_or_default(dir.path().join(SETTINGS_FILE_NAME));

    let settings = manager.get();
    assert_eq!(settings.locale, "zh-CN");
    assert_eq!(settings.default_sort_order, SortOrder::Oldest);
    assert_eq!(settings.simulated_latency_ms, 500);
}

#[test]
fn test_update_persists_and_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE_NAME);

    let manager = SettingsManager::load_or_default(&path);
    let updated = manager
        .update(|s| {
            s.locale = "en".to_string();
            s.default_sort_order = SortOrder::Newest;
            s.simulated_latency_ms = 0;
        })
        .unwrap();
    assert_eq!(updated.locale, "en");

    // 重载后与落盘内容一致
    let reloaded = SettingsManager::load_or_default(&path).get();
    assert_eq!(reloaded.locale, "en");
    assert_eq!(reloaded.default_sort_order, SortOrder::Newest);
    assert_eq!(reloaded.simulated_latency_ms, 0);
}

#[test]
fn test_corrupt_file_degrades_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE_NAME);
    std::fs::write(&path, "not json {{{").unwrap();

    let settings = SettingsManager::load_or_default(&path).get();
    assert_eq!(settings.locale, "zh-CN");
}

#[test]
fn test_unknown_fields_do_not_break_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE_NAME);
    std::fs::write(
        &path,
        r#"{"locale":"en","some_future_setting":{"deep":true}}"#,
    )
    .unwrap();

    let settings = SettingsManager::load_or_default(&path).get();
    assert_eq!(settings.locale, "en");
}

#[test]
fn test_settings_json_roundtrip() {
    let settings = AppSettings {
        locale: "en".to_string(),
        default_sort_order: SortOrder::Newest,
        simulated_latency_ms: 250,
        export_dir: Some("/tmp/exports".into()),
    };

    let json = serde_json::to_string(&settings).unwrap();
    assert!(json.contains("\"newest\""));

    let back: AppSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(back.locale, settings.locale);
    assert_eq!(back.default_sort_order, settings.default_sort_order);
    assert_eq!(back.export_dir, settings.export_dir);
}
