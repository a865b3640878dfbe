// ==========================================
// 珠宝生产流水线工作台 - 领域层
// ==========================================
// 职责: 实体与类型定义, 不含业务流程
// ==========================================

pub mod board;
pub mod item;
pub mod stage;
pub mod types;

// 重导出核心类型
pub use board::{DateRange, PipelineBoard, StageLane, StageSummary, StatusBreakdown};
pub use item::{format_due_date, parse_due_date, ProductionItem, DUE_DATE_FORMAT};
pub use stage::{StageCatalog, StageConfig, StageKey, StageVocabulary, PIPELINE_STAGES};
pub use types::{GenericStatus, ItemStatus, SortOrder, StatusTone, WorkflowStatus};
