// ==========================================
// 珠宝生产流水线工作台 - 引擎层
// ==========================================
// 职责: 聚合/筛选/导出/生成/刷新等业务规则
// 约束: 聚合与筛选为纯函数, 不做 I/O;
//       仅导出与刷新涉及文件/异步边界
// ==========================================

pub mod aggregator;
pub mod exporter;
pub mod filter_sort;
pub mod generator;
pub mod provider;
pub mod refresh;

// 重导出核心引擎
pub use aggregator::StageAggregator;
pub use exporter::{CsvExporter, ExportError, CSV_HEADER};
pub use filter_sort::{ItemQuery, StageFilterSort};
pub use generator::SyntheticItemGenerator;
pub use provider::{MockStageDataProvider, StageDataProvider, DEFAULT_SIMULATED_LATENCY_MS};
pub use refresh::{BoardRefreshService, RefreshError};
