// ==========================================
// 珠宝生产流水线工作台 - 应用状态
// ==========================================
// 职责: 装配设置/提供方/刷新服务/API 实例,
//       作为 Tauri 全局状态管理
// ==========================================

use std::sync::Arc;

use crate::api::BoardApi;
use crate::config::{get_default_settings_path, SettingsManager};
use crate::engine::provider::MockStageDataProvider;
use crate::engine::refresh::BoardRefreshService;

/// 应用状态
///
/// 包含所有 API 实例和共享资源
pub struct AppState {
    /// 应用设置
    pub settings: Arc<SettingsManager>,

    /// 看板 API
    pub board_api: Arc<BoardApi>,
}

impl AppState {
    /// 使用默认设置路径创建 AppState
    pub fn new() -> Self {
        Self::with_settings_path(get_default_settings_path())
    }

    /// 指定设置文件路径创建 AppState（测试/CI 用）
    pub fn with_settings_path(settings_path: impl Into<std::path::PathBuf>) -> Self {
        let settings_path = settings_path.into();
        tracing::info!(path = %settings_path.display(), "加载应用设置");

        let settings = Arc::new(SettingsManager::load_or_default(settings_path));
        let loaded = settings.get();

        // 按配置的界面语言初始化 i18n
        crate::i18n::set_locale(&loaded.locale);

        // 托管 API 替身: Mock 提供方 + 可配置模拟延迟
        let provider = Arc::new(MockStageDataProvider::with_latency_ms(
            loaded.simulated_latency_ms,
        ));
        let refresh_service = Arc::new(BoardRefreshService::new(provider));
        let board_api = Arc::new(BoardApi::new(refresh_service, settings.clone()));

        tracing::info!("AppState 初始化完成");
        Self {
            settings,
            board_api,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
