// ==========================================
// 珠宝生产流水线工作台 - 阶段数据提供方
// ==========================================
// 职责: 按阶段键提供条目列表（托管数据 API 的替身接口）
// 实现: MockStageDataProvider —
//       六个命名阶段返回固定种子数据（与日期范围无关）,
//       其余阶段用合成生成器降级生成
// 延迟: 可配置的模拟网络往返（默认 500ms, 测试置 0）,
//       通过异步 sleep 实现, 使整个加载 future 可被取消
// ==========================================

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::board::{DateRange, StageLane};
use crate::domain::item::ProductionItem;
use crate::domain::stage::StageKey;
use crate::domain::types::{ItemStatus, WorkflowStatus};

use super::generator::SyntheticItemGenerator;

/// 默认模拟延迟（对齐原型的人工 500ms 延时）
pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 500;

// ==========================================
// StageDataProvider trait
// ==========================================

/// 阶段数据提供方
///
/// 托管后端 API 的接缝; 生产实现做 REST 调用,
/// 本仓库提供 Mock 实现
#[async_trait]
pub trait StageDataProvider: Send + Sync {
    /// 按请求顺序加载各阶段泳道
    async fn load_board(
        &self,
        stages: &[StageKey],
        range: Option<&DateRange>,
        today: NaiveDate,
    ) -> Result<Vec<StageLane>>;
}

// ==========================================
// MockStageDataProvider - 种子数据实现
// ==========================================
pub struct MockStageDataProvider {
    latency: Duration,
}

impl MockStageDataProvider {
    pub fn new() -> Self {
        Self::with_latency_ms(DEFAULT_SIMULATED_LATENCY_MS)
    }

    pub fn with_latency_ms(latency_ms: u64) -> Self {
        Self {
            latency: Duration::from_millis(latency_ms),
        }
    }
}

impl Default for MockStageDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StageDataProvider for MockStageDataProvider {
    async fn load_board(
        &self,
        stages: &[StageKey],
        range: Option<&DateRange>,
        today: NaiveDate,
    ) -> Result<Vec<StageLane>> {
        // 模拟托管 API 往返; sleep 点即取消点
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let mut generator = SyntheticItemGenerator::new();
        let lanes = stages
            .iter()
            .map(|stage| StageLane {
                stage: stage.clone(),
                items: match seed_items(stage.as_str()) {
                    Some(items) => items,
                    None => generator.generate_stage(stage, range, today),
                },
            })
            .collect();

        Ok(lanes)
    }
}

// ==========================================
// 六个命名阶段的种子数据
// ==========================================
// 约束: design/cad 不使用 in-progress;
//       casting/setting/polishing/qc 可用
// 种子数据与日期范围无关（保真原型行为）
fn seed_items(stage: &str) -> Option<Vec<ProductionItem>> {
    use WorkflowStatus::*;

    let w = |status: WorkflowStatus| ItemStatus::Workflow(status);

    let items = match stage {
        "design" => vec![
            ProductionItem::new("ORD-1001", "Custom Engagement Ring", "Emma Wilson", "Jul 20", w(Review))
                .with_assignee("Maya Patel")
                .with_notes("Client wants a hidden halo"),
            ProductionItem::new("ORD-1002", "Sapphire Pendant", "James Lee", "Jul 18", w(Approved))
                .with_assignee("Maya Patel"),
            ProductionItem::new("ORD-1003", "Emerald Drop Earrings", "Sophia Martinez", "Jul 25", w(Revise))
                .with_notes("Rework sketch, stones too large"),
            ProductionItem::new("ORD-1004", "Vintage Signet Ring", "Liam Johnson", "Aug 2", w(Review)),
        ],
        "cad" => vec![
            ProductionItem::new("ORD-1005", "Platinum Wedding Band", "Olivia Brown", "Jul 16", w(Approved))
                .with_assignee("Dan Rogers"),
            ProductionItem::new("ORD-1006", "Pearl Choker Necklace", "Ava Chen", "Jul 22", w(Review))
                .with_notes("Awaiting clasp model"),
            ProductionItem::new("ORD-1007", "Diamond Stud Earrings", "Emma Wilson", "Jul 28", w(Revise)),
        ],
        "casting" => vec![
            ProductionItem::new("ORD-1008", "Gold Tennis Bracelet", "James Lee", "Jul 15", w(InProgress))
                .with_assignee("Victor Hugo"),
            ProductionItem::new("ORD-1009", "Custom Engagement Ring", "Sophia Martinez", "Jul 19", w(Review)),
            ProductionItem::new("ORD-1010", "Sapphire Pendant", "Liam Johnson", "Jul 24", w(Approved)),
            ProductionItem::new("ORD-1011", "Vintage Signet Ring", "Olivia Brown", "Jul 30", w(InProgress))
                .with_notes("Second pour, first had porosity"),
        ],
        "setting" => vec![
            ProductionItem::new("ORD-1012", "Emerald Drop Earrings", "Ava Chen", "Jul 14", w(InProgress))
                .with_assignee("Nina Kovacs"),
            ProductionItem::new("ORD-1013", "Diamond Stud Earrings", "James Lee", "Jul 21", w(Revise))
                .with_notes("Prong alignment off on left stud"),
            ProductionItem::new("ORD-1014", "Platinum Wedding Band", "Emma Wilson", "Jul 26", w(Review)),
        ],
        "polishing" => vec![
            ProductionItem::new("ORD-1015", "Pearl Choker Necklace", "Sophia Martinez", "Jul 13", w(Approved)),
            ProductionItem::new("ORD-1016", "Gold Tennis Bracelet", "Olivia Brown", "Jul 17", w(InProgress))
                .with_assignee("Victor Hugo"),
            ProductionItem::new("ORD-1017", "Custom Engagement Ring", "Liam Johnson", "Jul 23", w(Review)),
        ],
        "qc" => vec![
            ProductionItem::new("ORD-1018", "Sapphire Pendant", "Ava Chen", "Jul 12", w(Approved))
                .with_assignee("Grace Kim"),
            ProductionItem::new("ORD-1019", "Vintage Signet Ring", "James Lee", "Jul 15", w(InProgress)),
            ProductionItem::new("ORD-1020", "Emerald Drop Earrings", "Emma Wilson", "Jul 19", w(Revise))
                .with_notes("Surface scratch near post"),
            ProductionItem::new("ORD-1021", "Platinum Wedding Band", "Sophia Martinez", "Jul 27", w(Review)),
        ],
        _ => return None,
    };

    Some(items)
}
