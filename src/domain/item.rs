// ==========================================
// 珠宝生产流水线工作台 - 生产条目
// ==========================================
// 职责: 看板上单个订单条目的实体定义
// 生命周期: 整表重建（刷新即整体替换, 条目无跨代身份）
// ==========================================

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::types::ItemStatus;

/// 交期的线上格式: "MMM d" (如 "Jul 20"), 隐含当前自然年
pub const DUE_DATE_FORMAT: &str = "%b %-d";

/// 生产条目
///
/// `id` 在单个阶段列表内唯一, 不做全局唯一约束
/// （合成数据的订单号池会跨阶段复用）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionItem {
    /// 订单号 (如 ORD-1001)
    pub id: String,

    /// 商品描述
    pub name: String,

    /// 客户名称（自由文本, 无外键）
    pub customer: String,

    /// 交期, "MMM d" 格式, 隐含当前年
    pub due_date: String,

    /// 状态（两套词表的判别联合）
    pub status: ItemStatus,

    /// 负责人（可选）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,

    /// 备注（可选）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ProductionItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        customer: impl Into<String>,
        due_date: impl Into<String>,
        status: ItemStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            customer: customer.into(),
            due_date: due_date.into(),
            status,
            assignee: None,
            notes: None,
        }
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// 解析 "MMM d" 交期, 补上 `today` 所在的自然年
///
/// 注意: 无论上游日期范围如何, 年份始终取当前年。
/// 这是对既有前端行为的保真复刻——跨年交期会排序错位,
/// 属于已记录的歧义, 不在此处"修正"。
pub fn parse_due_date(due_date: &str, today: NaiveDate) -> Option<NaiveDate> {
    let with_year = format!("{} {}", due_date.trim(), today.year());
    NaiveDate::parse_from_str(&with_year, "%b %d %Y").ok()
}

/// 将日期格式化为 "MMM d" 交期字符串
pub fn format_due_date(date: NaiveDate) -> String {
    date.format(DUE_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::WorkflowStatus;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 7, 15).unwrap()
    }

    #[test]
    fn test_parse_due_date() {
        let parsed = parse_due_date("Jul 20", today()).unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2026, 7, 20).unwrap());

        // 单位数日期也可解析
        let parsed = parse_due_date("Jan 3", today()).unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2026, 1, 3).unwrap());

        // 非法格式返回 None
        assert!(parse_due_date("2026-07-20", today()).is_none());
        assert!(parse_due_date("", today()).is_none());
    }

    #[test]
    fn test_format_due_date_no_padding() {
        let date = NaiveDate::from_ymd_opt(2026, 7, 5).unwrap();
        assert_eq!(format_due_date(date), "Jul 5");
    }

    #[test]
    fn test_format_parse_roundtrip() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        let formatted = format_due_date(date);
        assert_eq!(parse_due_date(&formatted, today()), Some(date));
    }

    #[test]
    fn test_item_serde_skips_absent_optionals() {
        let item = ProductionItem::new(
            "ORD-1001",
            "Custom Engagement Ring",
            "Emma Wilson",
            "Jul 20",
            ItemStatus::Workflow(WorkflowStatus::Review),
        );
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("assignee"));
        assert!(!json.contains("notes"));

        let back: ProductionItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
