// ==========================================
// 珠宝生产流水线工作台 - API 层
// ==========================================
// 职责: 提供业务 API 接口, 供 Tauri 命令与集成测试调用
// ==========================================

pub mod board_api;
pub mod error;

// 重导出核心类型
pub use board_api::{BoardApi, CsvExport};
pub use error::{ApiError, ApiResult};
