// ==========================================
// 珠宝生产流水线工作台 - 核心库
// ==========================================
// 技术栈: Tauri (可选壳层) + Rust
// 系统定位: 生产阶段聚合/筛选/导出引擎 + 应用装配
// 持久化: 无内嵌数据库, 持久状态归托管后端所有
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 应用设置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// 性能统计
pub mod perf;

// API 层 - 业务接口
pub mod api;

// 应用层 - Tauri 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{GenericStatus, ItemStatus, SortOrder, StatusTone, WorkflowStatus};

// 领域实体
pub use domain::{
    DateRange, PipelineBoard, ProductionItem, StageCatalog, StageConfig, StageKey, StageLane,
    StageSummary, StageVocabulary, StatusBreakdown,
};

// 引擎
pub use engine::{
    BoardRefreshService, CsvExporter, ItemQuery, MockStageDataProvider, StageAggregator,
    StageDataProvider, StageFilterSort, SyntheticItemGenerator,
};

// API
pub use api::{ApiError, ApiResult, BoardApi, CsvExport};

// 配置
pub use config::{AppSettings, SettingsManager};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "珠宝定制生产流水线工作台";
