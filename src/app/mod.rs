// ==========================================
// 珠宝生产流水线工作台 - 应用层
// ==========================================
// 职责: Tauri 集成, 连接前端与后端
// ==========================================

pub mod state;

#[cfg(feature = "tauri-app")]
pub mod tauri_commands;

// 重导出
pub use state::AppState;

#[cfg(feature = "tauri-app")]
pub use tauri_commands::*;
