// ==========================================
// 珠宝生产流水线工作台 - 看板业务 API
// ==========================================
// 职责: 壳层（Tauri 命令/集成测试）消费的业务接口
// 边界: 所有输入校验与阶段键规范化在此完成,
//       引擎层只处理已规范化的数据
// 读路径: 汇总/查询/导出均作用于最近一次提交的看板
// ==========================================

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SettingsManager;
use crate::domain::board::{DateRange, PipelineBoard, StageSummary};
use crate::domain::item::ProductionItem;
use crate::domain::stage::{StageCatalog, StageConfig, StageKey};
use crate::engine::exporter::CsvExporter;
use crate::engine::filter_sort::{ItemQuery, StageFilterSort};
use crate::engine::refresh::BoardRefreshService;
use crate::engine::StageAggregator;
use crate::perf::PerfGuard;

use super::error::{ApiError, ApiResult};

/// CSV 导出结果（文件名 + 内容, 供前端触发浏览器保存）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvExport {
    pub file_name: String,
    pub content: String,
}

// ==========================================
// BoardApi - 看板业务 API
// ==========================================
pub struct BoardApi {
    refresh_service: Arc<BoardRefreshService>,
    settings: Arc<SettingsManager>,
    aggregator: StageAggregator,
    filter_sort: StageFilterSort,
    exporter: CsvExporter,
}

impl BoardApi {
    pub fn new(refresh_service: Arc<BoardRefreshService>, settings: Arc<SettingsManager>) -> Self {
        Self {
            refresh_service,
            settings,
            aggregator: StageAggregator::new(),
            filter_sort: StageFilterSort::new(),
            exporter: CsvExporter::new(),
        }
    }

    // ==========================================
    // 刷新
    // ==========================================

    /// 整表刷新看板
    ///
    /// 校验: 阶段列表非空、阶段键非空、from <= to;
    /// 被取代的刷新返回 `ApiError::RefreshSuperseded`（非致命）
    pub async fn refresh_board(
        &self,
        stage_keys: &[String],
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> ApiResult<Arc<PipelineBoard>> {
        let stages = normalize_stage_keys(stage_keys)?;
        let range = validate_range(from, to)?;
        let today = Utc::now().date_naive();

        let board = self.refresh_service.refresh(stages, range, today).await?;
        Ok(board)
    }

    // ==========================================
    // 读路径
    // ==========================================

    /// 阶段目录（六个命名阶段, 流水线顺序）
    pub fn stage_catalog(&self) -> Vec<StageConfig> {
        StageCatalog::pipeline()
    }

    /// 阶段汇总（徽标/分段进度条数据源）
    pub fn stage_summary(&self, stage_key: &str) -> ApiResult<StageSummary> {
        let _perf = PerfGuard::new("stage_summary");
        let stage = parse_stage_key(stage_key)?;
        let board = self.current_board()?;
        let lane = board
            .lane(&stage)
            .ok_or_else(|| ApiError::NotFound(format!("阶段不在当前看板上: {}", stage)))?;

        let config = StageCatalog::config_for(&stage);
        Ok(self.aggregator.summarize(&config, &lane.items))
    }

    /// 阶段明细查询: 筛选 + 排序
    ///
    /// 查询未指定排序方向时使用设置里的默认方向
    pub fn query_stage_items(
        &self,
        stage_key: &str,
        query: &ItemQuery,
    ) -> ApiResult<Vec<ProductionItem>> {
        let _perf = PerfGuard::new("query_stage_items");
        let stage = parse_stage_key(stage_key)?;
        let board = self.current_board()?;
        let lane = board
            .lane(&stage)
            .ok_or_else(|| ApiError::NotFound(format!("阶段不在当前看板上: {}", stage)))?;

        let today = Utc::now().date_naive();
        let default_sort = self.settings.get().default_sort_order;
        Ok(self.filter_sort.apply(&lane.items, query, today, default_sort))
    }

    // ==========================================
    // 导出
    // ==========================================

    /// 导出阶段明细为 CSV（内容随响应返回, 不落盘）
    pub fn export_stage_csv(&self, stage_key: &str, query: &ItemQuery) -> ApiResult<CsvExport> {
        let _perf = PerfGuard::new("export_stage_csv");
        let items = self.query_stage_items(stage_key, query)?;

        let stage = parse_stage_key(stage_key)?;
        let config = StageCatalog::config_for(&stage);
        let content = self.exporter.to_csv(&items)?;

        Ok(CsvExport {
            file_name: CsvExporter::file_name(&config.label),
            content,
        })
    }

    /// 导出阶段明细到目录
    ///
    /// `dir` 为 None 时依次回退: 设置里的导出目录 → 系统下载目录
    pub fn export_stage_csv_to_dir(
        &self,
        stage_key: &str,
        query: &ItemQuery,
        dir: Option<&Path>,
    ) -> ApiResult<PathBuf> {
        let _perf = PerfGuard::new("export_stage_csv_to_dir");
        let items = self.query_stage_items(stage_key, query)?;

        let stage = parse_stage_key(stage_key)?;
        let config = StageCatalog::config_for(&stage);

        let target = match dir {
            Some(dir) => dir.to_path_buf(),
            None => self
                .settings
                .get()
                .export_dir
                .or_else(dirs::download_dir)
                .ok_or_else(|| {
                    ApiError::ExportError("未配置导出目录且无法定位系统下载目录".to_string())
                })?,
        };

        let path = self.exporter.write_to_dir(&target, &config.label, &items)?;
        Ok(path)
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    fn current_board(&self) -> ApiResult<Arc<PipelineBoard>> {
        self.refresh_service
            .current_board()?
            .ok_or(ApiError::BoardNotReady)
    }
}

/// 规范化阶段键列表: 非空列表, 每个键 trim + 小写, 空键报错
fn normalize_stage_keys(stage_keys: &[String]) -> ApiResult<Vec<StageKey>> {
    if stage_keys.is_empty() {
        return Err(ApiError::InvalidInput("阶段列表不能为空".to_string()));
    }

    stage_keys
        .iter()
        .map(|raw| {
            StageKey::parse(raw)
                .ok_or_else(|| ApiError::InvalidInput(format!("阶段键不能为空白: {:?}", raw)))
        })
        .collect()
}

fn parse_stage_key(raw: &str) -> ApiResult<StageKey> {
    StageKey::parse(raw)
        .ok_or_else(|| ApiError::InvalidInput(format!("阶段键不能为空白: {:?}", raw)))
}

/// 校验日期范围: 必须成对出现且 from <= to
fn validate_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> ApiResult<Option<DateRange>> {
    match (from, to) {
        (None, None) => Ok(None),
        (Some(from), Some(to)) => DateRange::new(from, to)
            .map(Some)
            .ok_or_else(|| ApiError::InvalidInput(format!("日期范围非法: {} > {}", from, to))),
        _ => Err(ApiError::InvalidInput(
            "日期范围必须同时提供起止日期".to_string(),
        )),
    }
}
