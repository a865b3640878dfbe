// ==========================================
// 珠宝生产流水线工作台 - 条目筛选与排序引擎
// ==========================================
// 职责: 先筛选（搜索/状态/客户）, 再按解析后的交期排序
// 语义: 搜索对 name/id/customer 做大小写不敏感的子串匹配(OR);
//       状态/客户为精确匹配, 字面量 "all" 等价于不过滤
// 排序: 交期补当前年后比较; 无法解析的交期恒排在末尾;
//       排序稳定, 筛选幂等
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::item::{parse_due_date, ProductionItem};
use crate::domain::types::SortOrder;

// ==========================================
// 查询条件 (Item Query)
// ==========================================

/// 阶段明细列表的查询条件
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemQuery {
    /// 搜索词, 空串为不过滤
    #[serde(default)]
    pub search: String,

    /// 状态精确过滤, None 或 "all" 为不过滤
    #[serde(default)]
    pub status: Option<String>,

    /// 客户精确过滤, None 或 "all" 为不过滤
    #[serde(default)]
    pub customer: Option<String>,

    /// 排序方向, None 时由调用方决定默认值
    #[serde(default)]
    pub sort: Option<SortOrder>,
}

impl ItemQuery {
    /// 把字面量 "all" 规范化为 None（前端下拉框的约定值）
    fn effective_filter(value: &Option<String>) -> Option<&str> {
        match value.as_deref() {
            None | Some("all") => None,
            Some(v) => Some(v),
        }
    }
}

// ==========================================
// StageFilterSort - 筛选排序引擎
// ==========================================
pub struct StageFilterSort;

impl StageFilterSort {
    pub fn new() -> Self {
        Self
    }

    /// 筛选 + 排序
    ///
    /// `today` 决定交期解析时补的年份（恒为当前年,
    /// 跨年交期的排序错位是已记录的源语义, 不在此处修正）
    #[instrument(skip(self, items, query), fields(count = items.len(), sort = ?query.sort))]
    pub fn apply(
        &self,
        items: &[ProductionItem],
        query: &ItemQuery,
        today: NaiveDate,
        default_sort: SortOrder,
    ) -> Vec<ProductionItem> {
        let filtered = self.filter(items, query);
        self.sort(filtered, query.sort.unwrap_or(default_sort), today)
    }

    /// 筛选: 搜索 AND 状态 AND 客户
    pub fn filter(&self, items: &[ProductionItem], query: &ItemQuery) -> Vec<ProductionItem> {
        let search = query.search.trim().to_lowercase();
        let status = ItemQuery::effective_filter(&query.status);
        let customer = ItemQuery::effective_filter(&query.customer);

        items
            .iter()
            .filter(|item| {
                if !search.is_empty() && !matches_search(item, &search) {
                    return false;
                }
                if let Some(status) = status {
                    if item.status.as_token() != status {
                        return false;
                    }
                }
                if let Some(customer) = customer {
                    if item.customer != customer {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect()
    }

    /// 稳定排序: 按补年后的交期比较, 无法解析的交期排在末尾
    pub fn sort(
        &self,
        items: Vec<ProductionItem>,
        order: SortOrder,
        today: NaiveDate,
    ) -> Vec<ProductionItem> {
        // 先解析一次, 避免比较器里重复解析
        let mut keyed: Vec<(Option<NaiveDate>, ProductionItem)> = items
            .into_iter()
            .map(|item| (parse_due_date(&item.due_date, today), item))
            .collect();

        keyed.sort_by(|(a, _), (b, _)| match (a, b) {
            (Some(a), Some(b)) => match order {
                SortOrder::Oldest => a.cmp(b),
                SortOrder::Newest => b.cmp(a),
            },
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });

        keyed.into_iter().map(|(_, item)| item).collect()
    }
}

impl Default for StageFilterSort {
    fn default() -> Self {
        Self::new()
    }
}

/// 搜索匹配: name / id / customer 任一字段含搜索词（大小写不敏感）
fn matches_search(item: &ProductionItem, needle_lower: &str) -> bool {
    item.name.to_lowercase().contains(needle_lower)
        || item.id.to_lowercase().contains(needle_lower)
        || item.customer.to_lowercase().contains(needle_lower)
}
