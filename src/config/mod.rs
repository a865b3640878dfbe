// ==========================================
// 珠宝生产流水线工作台 - 配置层
// ==========================================
// 职责: 应用设置的加载/持久化
// 存储: 用户数据目录下的 settings.json
// ==========================================

pub mod settings;

// 重导出核心设置类型
pub use settings::{
    get_default_data_dir, get_default_settings_path, AppSettings, SettingsManager,
    SETTINGS_FILE_NAME,
};
