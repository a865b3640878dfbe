// ==========================================
// 珠宝生产流水线工作台 - 应用设置
// ==========================================
// 职责: 用户数据目录下的 JSON 设置文件
// 容错: 文件缺失 → 全部默认值; 未知字段忽略;
//       解析失败记 WARN 并回退默认（不阻塞启动）
// ==========================================

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::domain::types::SortOrder;
use crate::engine::provider::DEFAULT_SIMULATED_LATENCY_MS;

/// 设置文件名
pub const SETTINGS_FILE_NAME: &str = "settings.json";

// ==========================================
// 应用设置 (App Settings)
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// 界面语言 ("zh-CN" / "en")
    pub locale: String,

    /// 明细列表的默认排序方向
    pub default_sort_order: SortOrder,

    /// 模拟托管 API 往返的延迟（毫秒, 测试可置 0）
    pub simulated_latency_ms: u64,

    /// CSV 导出目录; None 时回退到系统下载目录
    pub export_dir: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            locale: "zh-CN".to_string(),
            default_sort_order: SortOrder::Oldest,
            simulated_latency_ms: DEFAULT_SIMULATED_LATENCY_MS,
            export_dir: None,
        }
    }
}

// ==========================================
// SettingsManager - 设置管理器
// ==========================================
pub struct SettingsManager {
    path: PathBuf,
    settings: RwLock<AppSettings>,
}

impl SettingsManager {
    /// 从指定路径加载; 文件缺失或损坏时使用默认值
    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<AppSettings>(&text) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(path = %path.display(), "设置文件解析失败, 使用默认值: {}", e);
                    AppSettings::default()
                }
            },
            Err(_) => AppSettings::default(),
        };

        Self {
            path,
            settings: RwLock::new(settings),
        }
    }

    /// 当前设置的快照
    pub fn get(&self) -> AppSettings {
        self.settings
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// 修改并落盘
    pub fn update<F>(&self, mutate: F) -> Result<AppSettings, String>
    where
        F: FnOnce(&mut AppSettings),
    {
        let updated = {
            let mut guard = self
                .settings
                .write()
                .map_err(|e| format!("设置锁获取失败: {}", e))?;
            mutate(&mut guard);
            guard.clone()
        };
        self.save(&updated)?;
        Ok(updated)
    }

    fn save(&self, settings: &AppSettings) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| format!("创建设置目录失败: {}", e))?;
        }
        let text = serde_json::to_string_pretty(settings)
            .map_err(|e| format!("设置序列化失败: {}", e))?;
        fs::write(&self.path, text).map_err(|e| format!("设置文件写入失败: {}", e))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

// ==========================================
// 默认数据目录
// ==========================================

/// 获取默认数据目录
///
/// - 环境变量 JEWELRY_BOARD_DATA_DIR 可显式覆盖（调试/测试/CI）
/// - 开发环境: 用户数据目录/jewelry-production-board-dev
/// - 生产环境: 用户数据目录/jewelry-production-board
pub fn get_default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("JEWELRY_BOARD_DATA_DIR") {
        let trimmed = dir.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    let mut path = PathBuf::from(".");
    if let Some(data_dir) = dirs::data_dir() {
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("jewelry-production-board-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("jewelry-production-board");
        }

        fs::create_dir_all(&path).ok();
    }
    path
}

/// 默认设置文件路径
pub fn get_default_settings_path() -> PathBuf {
    get_default_data_dir().join(SETTINGS_FILE_NAME)
}
