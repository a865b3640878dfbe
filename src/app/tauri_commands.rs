// ==========================================
// 珠宝生产流水线工作台 - Tauri 命令层
// ==========================================
// 职责: 连接前端与 BoardApi, 统一错误信封
// 约定: 返回值为 JSON 字符串; 错误为 {code, message} 信封
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::app::state::AppState;
use crate::engine::filter_sort::ItemQuery;

// ==========================================
// 公共工具: 错误映射、日期解析
// ==========================================

/// 错误响应（返回给前端）
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// 错误代码
    code: String,

    /// 错误消息
    message: String,
}

/// 将 ApiError 转换为 JSON 字符串（Tauri 要求）
fn map_api_error(err: ApiError) -> String {
    let error_response = ErrorResponse {
        code: err.code().to_string(),
        message: err.to_string(),
    };
    serde_json::to_string(&error_response).unwrap_or_else(|_| err.to_string())
}

/// 解析日期字符串
fn parse_date(date_str: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
        map_api_error(ApiError::InvalidInput(format!(
            "日期格式错误（应为YYYY-MM-DD）: {}",
            e
        )))
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("序列化失败: {}", e))
}

// ==========================================
// 看板相关命令
// ==========================================

/// 整表重建看板
///
/// 后发请求会取消在途请求; 被取代方收到 REFRESH_SUPERSEDED,
/// 前端可将其当作非致命信号静默忽略
#[tauri::command(rename_all = "snake_case")]
pub async fn regenerate_pipeline_board(
    state: tauri::State<'_, AppState>,
    stage_keys: Vec<String>,
    from_date: Option<String>,
    to_date: Option<String>,
) -> Result<String, String> {
    let from = from_date.as_deref().map(parse_date).transpose()?;
    let to = to_date.as_deref().map(parse_date).transpose()?;

    let board = state
        .board_api
        .refresh_board(&stage_keys, from, to)
        .await
        .map_err(map_api_error)?;

    to_json(&*board)
}

/// 阶段目录（六个命名阶段, 流水线顺序）
#[tauri::command(rename_all = "snake_case")]
pub async fn get_stage_catalog(state: tauri::State<'_, AppState>) -> Result<String, String> {
    to_json(&state.board_api.stage_catalog())
}

/// 阶段汇总
#[tauri::command(rename_all = "snake_case")]
pub async fn get_stage_summary(
    state: tauri::State<'_, AppState>,
    stage: String,
) -> Result<String, String> {
    let summary = state
        .board_api
        .stage_summary(&stage)
        .map_err(map_api_error)?;

    to_json(&summary)
}

/// 阶段明细查询（筛选 + 排序）
#[tauri::command(rename_all = "snake_case")]
pub async fn query_stage_items(
    state: tauri::State<'_, AppState>,
    stage: String,
    query: ItemQuery,
) -> Result<String, String> {
    let items = state
        .board_api
        .query_stage_items(&stage, &query)
        .map_err(map_api_error)?;

    to_json(&items)
}

/// 导出阶段明细为 CSV（返回文件名 + 内容, 由前端触发保存）
#[tauri::command(rename_all = "snake_case")]
pub async fn export_stage_csv(
    state: tauri::State<'_, AppState>,
    stage: String,
    query: ItemQuery,
) -> Result<String, String> {
    let export = state
        .board_api
        .export_stage_csv(&stage, &query)
        .map_err(map_api_error)?;

    to_json(&export)
}

// ==========================================
// 设置相关命令
// ==========================================

/// 切换界面语言并持久化
#[tauri::command(rename_all = "snake_case")]
pub async fn set_app_locale(
    state: tauri::State<'_, AppState>,
    locale: String,
) -> Result<String, String> {
    if !crate::i18n::is_supported(&locale) {
        return Err(map_api_error(ApiError::InvalidInput(
            crate::i18n::t_with_args("settings.unsupported_locale", &[("locale", &locale)]),
        )));
    }

    crate::i18n::set_locale(&locale);
    let updated = state
        .settings
        .update(|s| s.locale = locale.clone())
        .map_err(|e| map_api_error(ApiError::InternalError(e)))?;

    to_json(&updated)
}

/// 读取当前应用设置
#[tauri::command(rename_all = "snake_case")]
pub async fn get_app_settings(state: tauri::State<'_, AppState>) -> Result<String, String> {
    to_json(&state.settings.get())
}
