// ==========================================
// 珠宝生产流水线工作台 - 阶段聚合引擎
// ==========================================
// 职责: 单遍扫描条目列表, 产出分桶计数 + 进度百分比 + 色调
// 规则: 词表外条目不进任何桶, 但计入 total 与 off_vocabulary,
//       并输出 WARN 日志（可观测, 不再静默）
// ==========================================

use tracing::instrument;

use crate::domain::board::{StageSummary, StatusBreakdown};
use crate::domain::item::ProductionItem;
use crate::domain::stage::{StageConfig, StageVocabulary};
use crate::domain::types::{GenericStatus, ItemStatus, StatusTone, WorkflowStatus};

// ==========================================
// StageAggregator - 阶段聚合引擎
// ==========================================
pub struct StageAggregator;

impl StageAggregator {
    pub fn new() -> Self {
        Self
    }

    /// 聚合单个阶段的条目列表
    ///
    /// 计数为单遍扫描, 与条目顺序无关
    #[instrument(skip(self, items), fields(stage = %config.key, count = items.len()))]
    pub fn summarize(&self, config: &StageConfig, items: &[ProductionItem]) -> StageSummary {
        let breakdown = match config.vocabulary {
            StageVocabulary::Workflow { .. } => self.count_workflow(config, items),
            StageVocabulary::Generic => self.count_generic(config, items),
        };

        let total = items.len();
        let off_vocabulary = total - breakdown.bucket_sum();

        StageSummary {
            stage: config.key.clone(),
            label: config.label.clone(),
            total,
            off_vocabulary,
            breakdown,
            progress_value: progress_value(breakdown.favorable(), total),
            tone: tone(&breakdown),
        }
    }

    fn count_workflow(&self, config: &StageConfig, items: &[ProductionItem]) -> StatusBreakdown {
        let (mut in_progress, mut review, mut approved, mut revise) = (0usize, 0usize, 0usize, 0usize);

        for item in items {
            match item.status {
                ItemStatus::Workflow(WorkflowStatus::InProgress) => in_progress += 1,
                ItemStatus::Workflow(WorkflowStatus::Review) => review += 1,
                ItemStatus::Workflow(WorkflowStatus::Approved) => approved += 1,
                ItemStatus::Workflow(WorkflowStatus::Revise) => revise += 1,
                ItemStatus::Generic(status) => {
                    warn_off_vocabulary(config, item, status.as_token());
                }
            }
        }

        StatusBreakdown::Workflow {
            in_progress,
            review,
            approved,
            revise,
        }
    }

    fn count_generic(&self, config: &StageConfig, items: &[ProductionItem]) -> StatusBreakdown {
        let (mut on_track, mut delayed, mut overdue) = (0usize, 0usize, 0usize);

        for item in items {
            match item.status {
                ItemStatus::Generic(GenericStatus::OnTrack) => on_track += 1,
                ItemStatus::Generic(GenericStatus::Delayed) => delayed += 1,
                ItemStatus::Generic(GenericStatus::Overdue) => overdue += 1,
                ItemStatus::Workflow(status) => {
                    warn_off_vocabulary(config, item, status.as_token());
                }
            }
        }

        StatusBreakdown::Generic {
            on_track,
            delayed,
            overdue,
        }
    }
}

impl Default for StageAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// 进度百分比: round(favorable / total * 100), total == 0 时为 100
fn progress_value(favorable: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    (favorable as f64 / total as f64 * 100.0).round() as u8
}

/// 色调: 最差桶非空 → Destructive, 中间桶非空 → Warning, 否则 Success
fn tone(breakdown: &StatusBreakdown) -> StatusTone {
    if breakdown.has_worst() {
        StatusTone::Destructive
    } else if breakdown.has_middle() {
        StatusTone::Warning
    } else {
        StatusTone::Success
    }
}

fn warn_off_vocabulary(config: &StageConfig, item: &ProductionItem, status_token: &str) {
    tracing::warn!(
        stage = %config.key,
        item_id = %item.id,
        status = status_token,
        "条目状态不在当前阶段词表内, 未计入分桶"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stage::{StageCatalog, StageKey};

    fn item(id: &str, status: ItemStatus) -> ProductionItem {
        ProductionItem::new(id, "Test Piece", "Test Customer", "Jul 20", status)
    }

    fn workflow_config() -> StageConfig {
        StageCatalog::config_for(&StageKey::parse("design").unwrap())
    }

    fn generic_config() -> StageConfig {
        StageCatalog::config_for(&StageKey::parse("engraving").unwrap())
    }

    #[test]
    fn test_worked_example_from_dashboard() {
        // O1 approved / O2 revise / O3 review → 33%, Destructive
        let items = vec![
            item("O1", ItemStatus::Workflow(WorkflowStatus::Approved)),
            item("O2", ItemStatus::Workflow(WorkflowStatus::Revise)),
            item("O3", ItemStatus::Workflow(WorkflowStatus::Review)),
        ];

        let summary = StageAggregator::new().summarize(&workflow_config(), &items);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.off_vocabulary, 0);
        assert_eq!(
            summary.breakdown,
            StatusBreakdown::Workflow {
                in_progress: 0,
                review: 1,
                approved: 1,
                revise: 1,
            }
        );
        assert_eq!(summary.progress_value, 33);
        assert_eq!(summary.tone, StatusTone::Destructive);
    }

    #[test]
    fn test_empty_stage_is_fully_progressed() {
        let summary = StageAggregator::new().summarize(&workflow_config(), &[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.progress_value, 100);
        assert_eq!(summary.tone, StatusTone::Success);
    }

    #[test]
    fn test_off_vocabulary_counted_but_not_bucketed() {
        // 通用状态出现在工艺阶段: 不进桶, 计入 total 与 off_vocabulary
        let items = vec![
            item("O1", ItemStatus::Workflow(WorkflowStatus::Approved)),
            item("O2", ItemStatus::Generic(GenericStatus::Overdue)),
        ];

        let summary = StageAggregator::new().summarize(&workflow_config(), &items);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.off_vocabulary, 1);
        assert_eq!(summary.breakdown.bucket_sum(), 1);
        // overdue 属于词表外, 不得影响色调
        assert_eq!(summary.tone, StatusTone::Success);
        // 50% (1/2), 分母仍是 total
        assert_eq!(summary.progress_value, 50);
    }

    #[test]
    fn test_generic_stage_tone_ladder() {
        let aggregator = StageAggregator::new();
        let config = generic_config();

        let on_track = vec![item("O1", ItemStatus::Generic(GenericStatus::OnTrack))];
        assert_eq!(
            aggregator.summarize(&config, &on_track).tone,
            StatusTone::Success
        );

        let delayed = vec![
            item("O1", ItemStatus::Generic(GenericStatus::OnTrack)),
            item("O2", ItemStatus::Generic(GenericStatus::Delayed)),
        ];
        assert_eq!(
            aggregator.summarize(&config, &delayed).tone,
            StatusTone::Warning
        );

        let overdue = vec![
            item("O1", ItemStatus::Generic(GenericStatus::Delayed)),
            item("O2", ItemStatus::Generic(GenericStatus::Overdue)),
        ];
        assert_eq!(
            aggregator.summarize(&config, &overdue).tone,
            StatusTone::Destructive
        );
    }

    #[test]
    fn test_progress_value_bounds() {
        let aggregator = StageAggregator::new();
        let config = generic_config();

        let all_good: Vec<_> = (0..5)
            .map(|i| item(&format!("O{}", i), ItemStatus::Generic(GenericStatus::OnTrack)))
            .collect();
        assert_eq!(aggregator.summarize(&config, &all_good).progress_value, 100);

        let none_good: Vec<_> = (0..5)
            .map(|i| item(&format!("O{}", i), ItemStatus::Generic(GenericStatus::Overdue)))
            .collect();
        assert_eq!(aggregator.summarize(&config, &none_good).progress_value, 0);
    }
}
