// ==========================================
// 阶段聚合引擎集成测试
// ==========================================
// 测试目标: 分桶计数不变式 / 进度百分比 / 色调阶梯
// 不变式: sum(桶) <= total, 相等当且仅当全部状态在词表内
// ==========================================


use jewelry_production_board::domain::stage::{StageCatalog, StageKey};
use jewelry_production_board::domain::types::{GenericStatus, StatusTone, WorkflowStatus};
use jewelry_production_board::engine::StageAggregator;
use test_helpers::ItemBuilder;

fn config_for(key: &str) -> jewelry_production_board::StageConfig {
    StageCatalog::config_for(&StageKey::parse(key).unwrap())
}

#[test]
fn test_bucket_sum_equals_total_when_all_in_vocabulary() {
    let items = vec![
        ItemBuilder::new("O1").workflow(WorkflowStatus::Approved).build(),
        ItemBuilder::new("O2").workflow(WorkflowStatus::Review).build(),
        ItemBuilder::new("O3").workflow(WorkflowStatus::Revise).build(),
        ItemBuilder::new("O4").workflow(WorkflowStatus::InProgress).build(),
    ];

    let summary = StageAggregator::new().summarize(&config_for("casting"), &items);
    assert_eq!(summary.breakdown.bucket_sum(), summary.total);
    assert_eq!(summary.off_vocabulary, 0);
}

#[test]
fn test_bucket_sum_strictly_less_with_off_vocabulary_items() {
    // 通用状态混入工艺阶段: 桶覆盖不到, total 仍计入
    let items = vec![
        ItemBuilder::new("O1").workflow(WorkflowStatus::Approved).build(),
        ItemBuilder::new("O2").generic(GenericStatus::Delayed).build(),
        ItemBuilder::new("O3").generic(GenericStatus::Overdue).build(),
    ];

    let summary = StageAggregator::new().summarize(&config_for("design"), &items);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.breakdown.bucket_sum(), 1);
    assert_eq!(summary.off_vocabulary, 2);
    assert!(summary.breakdown.bucket_sum() < summary.total);
    // 词表外的 overdue 不得把色调拉成 Destructive
    assert_eq!(summary.tone, StatusTone::Success);
}

#[test]
fn test_progress_value_always_in_unit_interval() {
    let aggregator = StageAggregator::new();
    let config = config_for("qc");

    for approved in 0..=6usize {
        let mut items = Vec::new();
        for i in 0..approved {
            items.push(ItemBuilder::new(&format!("A{}", i)).workflow(WorkflowStatus::Approved).build());
        }
        for i in 0..(6 - approved) {
            items.push(ItemBuilder::new(&format!("R{}", i)).workflow(WorkflowStatus::Review).build());
        }

        let summary = aggregator.summarize(&config, &items);
        assert!(summary.progress_value <= 100);
    }
}

#[test]
fn test_empty_list_is_one_hundred_percent() {
    let summary = StageAggregator::new().summarize(&config_for("polishing"), &[]);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.progress_value, 100);
}

#[test]
fn test_workflow_tone_ladder() {
    let aggregator = StageAggregator::new();
    let config = config_for("setting");

    // 只有 approved → Success
    let items = vec![ItemBuilder::new("O1").workflow(WorkflowStatus::Approved).build()];
    assert_eq!(aggregator.summarize(&config, &items).tone, StatusTone::Success);

    // in-progress 属中间桶 → Warning
    let items = vec![
        ItemBuilder::new("O1").workflow(WorkflowStatus::Approved).build(),
        ItemBuilder::new("O2").workflow(WorkflowStatus::InProgress).build(),
    ];
    assert_eq!(aggregator.summarize(&config, &items).tone, StatusTone::Warning);

    // revise 压倒一切 → Destructive
    let items = vec![
        ItemBuilder::new("O1").workflow(WorkflowStatus::Approved).build(),
        ItemBuilder::new("O2").workflow(WorkflowStatus::InProgress).build(),
        ItemBuilder::new("O3").workflow(WorkflowStatus::Revise).build(),
    ];
    assert_eq!(aggregator.summarize(&config, &items).tone, StatusTone::Destructive);
}

#[test]
fn test_generic_stage_counts() {
    let items = vec![
        ItemBuilder::new("O1").generic(GenericStatus::OnTrack).build(),
        ItemBuilder::new("O2").generic(GenericStatus::OnTrack).build(),
        ItemBuilder::new("O3").generic(GenericStatus::Delayed).build(),
        ItemBuilder::new("O4").generic(GenericStatus::Overdue).build(),
    ];

    let summary = StageAggregator::new().summarize(&config_for("engraving"), &items);
    assert_eq!(
        summary.breakdown,
        jewelry_production_board::StatusBreakdown::Generic {
            on_track: 2,
            delayed: 1,
            overdue: 1,
        }
    );
    // favorable = on-track → round(2/4*100) = 50
    assert_eq!(summary.progress_value, 50);
    assert_eq!(summary.tone, StatusTone::Destructive);
}
