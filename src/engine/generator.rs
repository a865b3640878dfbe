// ==========================================
// 珠宝生产流水线工作台 - 合成条目生成器
// ==========================================
// 职责: 为未命名阶段合成 1~8 条随机条目
// 设计: 生成器对象持有自己的订单号游标与 RNG,
//       每次加载新建实例, 不使用模块级可变状态
//       （替代前端原型的全局 orderIndex 泄漏）
// ==========================================

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::domain::board::DateRange;
use crate::domain::item::{format_due_date, ProductionItem};
use crate::domain::stage::StageKey;
use crate::domain::types::{GenericStatus, ItemStatus};

/// 订单号池: ORD-1001..=ORD-1040, 轮转取号
/// 跨阶段撞号是预期行为（条目按阶段独立, 不做交叉引用）
const ORDER_POOL_START: u32 = 1001;
const ORDER_POOL_SIZE: u32 = 40;

/// 合成条目的商品名池
const ITEM_NAMES: [&str; 8] = [
    "Custom Engagement Ring",
    "Sapphire Pendant",
    "Gold Tennis Bracelet",
    "Emerald Drop Earrings",
    "Platinum Wedding Band",
    "Pearl Choker Necklace",
    "Vintage Signet Ring",
    "Diamond Stud Earrings",
];

/// 合成条目的客户名池
const CUSTOMERS: [&str; 6] = [
    "Emma Wilson",
    "James Lee",
    "Sophia Martinez",
    "Ava Chen",
    "Liam Johnson",
    "Olivia Brown",
];

const GENERIC_STATUSES: [GenericStatus; 3] = [
    GenericStatus::OnTrack,
    GenericStatus::Delayed,
    GenericStatus::Overdue,
];

// ==========================================
// SyntheticItemGenerator - 合成条目生成器
// ==========================================
pub struct SyntheticItemGenerator {
    rng: StdRng,
    order_cursor: u32,
}

impl SyntheticItemGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            order_cursor: 0,
        }
    }

    /// 固定种子构造（测试用, 使生成结果可复现）
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            order_cursor: 0,
        }
    }

    /// 为单个阶段合成 1~8 条条目
    ///
    /// 交期: 有日期范围时在范围内均匀抽取;
    /// 否则按状态相对 `today` 偏移 (on-track +7 / delayed +3 / overdue +0)
    pub fn generate_stage(
        &mut self,
        stage: &StageKey,
        range: Option<&DateRange>,
        today: NaiveDate,
    ) -> Vec<ProductionItem> {
        let count = self.rng.gen_range(1..=8);
        tracing::debug!(stage = %stage, count, "合成阶段条目");

        (0..count)
            .map(|_| self.generate_item(range, today))
            .collect()
    }

    fn generate_item(&mut self, range: Option<&DateRange>, today: NaiveDate) -> ProductionItem {
        let status = *GENERIC_STATUSES
            .choose(&mut self.rng)
            .unwrap_or(&GenericStatus::OnTrack);

        let due = match range {
            Some(range) => {
                let offset = self.rng.gen_range(0..=range.span_days());
                range.from + Duration::days(offset)
            }
            None => today + Duration::days(status.due_offset_days()),
        };

        let name = *ITEM_NAMES.choose(&mut self.rng).unwrap_or(&ITEM_NAMES[0]);
        let customer = *CUSTOMERS.choose(&mut self.rng).unwrap_or(&CUSTOMERS[0]);

        ProductionItem::new(
            self.next_order_id(),
            name,
            customer,
            format_due_date(due),
            ItemStatus::Generic(status),
        )
    }

    /// 轮转取号: ORD-1001..=ORD-1040 循环
    fn next_order_id(&mut self) -> String {
        let id = ORDER_POOL_START + self.order_cursor % ORDER_POOL_SIZE;
        self.order_cursor += 1;
        format!("ORD-{}", id)
    }
}

impl Default for SyntheticItemGenerator {
    fn default() -> Self {
        Self::new()
    }
}
