// ==========================================
// 珠宝生产流水线工作台 - 看板快照与汇总
// ==========================================
// 职责: 一次刷新产出的不可变看板快照, 以及阶段汇总结构
// 不变式: sum(桶计数) <= total, 相等当且仅当
//         所有条目状态都在当前阶段词表内
// ==========================================

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::item::ProductionItem;
use super::stage::StageKey;
use super::types::StatusTone;

// ==========================================
// 日期范围 (Date Range)
// ==========================================

/// 闭区间日期范围, `from <= to` 在 API 边界校验
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Option<Self> {
        if from <= to {
            Some(Self { from, to })
        } else {
            None
        }
    }

    /// 区间跨度（天, 含端点则为 span_days + 1 个候选日）
    pub fn span_days(&self) -> i64 {
        (self.to - self.from).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

// ==========================================
// 阶段泳道与看板 (Stage Lane / Pipeline Board)
// ==========================================

/// 单个阶段的条目列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageLane {
    pub stage: StageKey,
    pub items: Vec<ProductionItem>,
}

/// 一次刷新产出的看板快照
///
/// 泳道顺序与请求的阶段顺序一致; 快照不可变,
/// 新刷新整体替换旧快照（条目无跨代身份）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineBoard {
    /// 刷新标识
    pub refresh_id: Uuid,

    /// 生成时间 (UTC)
    pub generated_at: DateTime<Utc>,

    /// 请求时的日期范围（可选）
    pub range: Option<DateRange>,

    /// 各阶段泳道
    pub lanes: Vec<StageLane>,
}

impl PipelineBoard {
    /// 按阶段键查泳道
    pub fn lane(&self, stage: &StageKey) -> Option<&StageLane> {
        self.lanes.iter().find(|lane| &lane.stage == stage)
    }

    pub fn total_items(&self) -> usize {
        self.lanes.iter().map(|lane| lane.items.len()).sum()
    }
}

// ==========================================
// 状态分桶 (Status Breakdown)
// ==========================================

/// 按阶段词表分桶的状态计数
///
/// 判别枚举使"未知状态静默丢弃"变成编译期可穷举的匹配,
/// 而不是运行时的字符串缺口。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "vocabulary", rename_all = "snake_case")]
pub enum StatusBreakdown {
    Workflow {
        in_progress: usize,
        review: usize,
        approved: usize,
        revise: usize,
    },
    Generic {
        on_track: usize,
        delayed: usize,
        overdue: usize,
    },
}

impl StatusBreakdown {
    /// 所有桶计数之和（不含词表外条目）
    pub fn bucket_sum(&self) -> usize {
        match *self {
            StatusBreakdown::Workflow {
                in_progress,
                review,
                approved,
                revise,
            } => in_progress + review + approved + revise,
            StatusBreakdown::Generic {
                on_track,
                delayed,
                overdue,
            } => on_track + delayed + overdue,
        }
    }

    /// 有利桶计数: 工艺词表取 approved, 通用词表取 on-track
    pub fn favorable(&self) -> usize {
        match *self {
            StatusBreakdown::Workflow { approved, .. } => approved,
            StatusBreakdown::Generic { on_track, .. } => on_track,
        }
    }

    /// 最差桶非空: revise / overdue
    pub fn has_worst(&self) -> bool {
        match *self {
            StatusBreakdown::Workflow { revise, .. } => revise > 0,
            StatusBreakdown::Generic { overdue, .. } => overdue > 0,
        }
    }

    /// 中间桶非空: review+in-progress / delayed
    pub fn has_middle(&self) -> bool {
        match *self {
            StatusBreakdown::Workflow {
                in_progress,
                review,
                ..
            } => in_progress + review > 0,
            StatusBreakdown::Generic { delayed, .. } => delayed > 0,
        }
    }
}

// ==========================================
// 阶段汇总 (Stage Summary)
// ==========================================

/// 阶段聚合结果, 供徽标/分段进度条展示
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSummary {
    /// 阶段键
    pub stage: StageKey,

    /// 显示名
    pub label: String,

    /// 条目总数（含词表外条目）
    pub total: usize,

    /// 词表外条目数 (= total - bucket_sum)
    pub off_vocabulary: usize,

    /// 分桶计数
    pub breakdown: StatusBreakdown,

    /// 进度百分比: round(favorable / total * 100), total == 0 时为 100
    pub progress_value: u8,

    /// 整体色调
    pub tone: StatusTone,
}
