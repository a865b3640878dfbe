// ==========================================
// 珠宝生产流水线工作台 - 领域类型定义
// ==========================================
// 职责: 状态词表、色调、排序方向等封闭枚举
// 线上格式: kebab-case token (与前端约定一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 工艺阶段状态 (Workflow Status)
// ==========================================
// 适用: design / cad / casting / setting / polishing / qc
// 约束: in-progress 仅在 casting/setting/polishing/qc 出现,
//       design/cad 的种子数据不使用该状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowStatus {
    InProgress, // 制作中
    Review,     // 待审核
    Approved,   // 已通过
    Revise,     // 需返工
}

impl WorkflowStatus {
    /// 线上 token (kebab-case)
    pub fn as_token(&self) -> &'static str {
        match self {
            WorkflowStatus::InProgress => "in-progress",
            WorkflowStatus::Review => "review",
            WorkflowStatus::Approved => "approved",
            WorkflowStatus::Revise => "revise",
        }
    }

    /// 从 token 解析
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "in-progress" => Some(WorkflowStatus::InProgress),
            "review" => Some(WorkflowStatus::Review),
            "approved" => Some(WorkflowStatus::Approved),
            "revise" => Some(WorkflowStatus::Revise),
            _ => None,
        }
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_token())
    }
}

// ==========================================
// 通用阶段状态 (Generic Status)
// ==========================================
// 适用: 六个命名阶段之外的任意阶段（降级词表）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenericStatus {
    OnTrack, // 正常推进
    Delayed, // 有延迟
    Overdue, // 已逾期
}

impl GenericStatus {
    pub fn as_token(&self) -> &'static str {
        match self {
            GenericStatus::OnTrack => "on-track",
            GenericStatus::Delayed => "delayed",
            GenericStatus::Overdue => "overdue",
        }
    }

    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "on-track" => Some(GenericStatus::OnTrack),
            "delayed" => Some(GenericStatus::Delayed),
            "overdue" => Some(GenericStatus::Overdue),
            _ => None,
        }
    }

    /// 合成数据的交期偏移天数（无日期范围时相对"今天"）
    pub fn due_offset_days(&self) -> i64 {
        match self {
            GenericStatus::OnTrack => 7,
            GenericStatus::Delayed => 3,
            GenericStatus::Overdue => 0,
        }
    }
}

impl fmt::Display for GenericStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_token())
    }
}

// ==========================================
// 条目状态 (Item Status)
// ==========================================
// 两套词表的判别联合。哪套词表有效由所属阶段决定,
// 混用属于数据缺陷（聚合时计入 off_vocabulary, 不计入任何桶）。
// 两套 token 互不重叠, 因此反序列化可用 untagged。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemStatus {
    Workflow(WorkflowStatus),
    Generic(GenericStatus),
}

impl ItemStatus {
    pub fn as_token(&self) -> &'static str {
        match self {
            ItemStatus::Workflow(s) => s.as_token(),
            ItemStatus::Generic(s) => s.as_token(),
        }
    }

    pub fn from_token(s: &str) -> Option<Self> {
        WorkflowStatus::from_token(s)
            .map(ItemStatus::Workflow)
            .or_else(|| GenericStatus::from_token(s).map(ItemStatus::Generic))
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_token())
    }
}

// ==========================================
// 状态色调 (Status Tone)
// ==========================================
// 阶段汇总的整体色调: 最差桶非空 → Destructive,
// 中间桶非空 → Warning, 否则 Success
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Success,     // 绿色
    Warning,     // 黄色
    Destructive, // 红色
}

impl fmt::Display for StatusTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusTone::Success => write!(f, "success"),
            StatusTone::Warning => write!(f, "warning"),
            StatusTone::Destructive => write!(f, "destructive"),
        }
    }
}

// ==========================================
// 排序方向 (Sort Order)
// ==========================================
// 按解析后的交期排序: Oldest 升序 / Newest 降序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Oldest, // 交期最早在前
    Newest, // 交期最晚在前
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Oldest
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Oldest => write!(f, "oldest"),
            SortOrder::Newest => write!(f, "newest"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_token_roundtrip() {
        for token in [
            "in-progress",
            "review",
            "approved",
            "revise",
            "on-track",
            "delayed",
            "overdue",
        ] {
            let status = ItemStatus::from_token(token).expect("token 应可解析");
            assert_eq!(status.as_token(), token);
        }
        assert_eq!(ItemStatus::from_token("paused"), None);
    }

    #[test]
    fn test_untagged_deserialize() {
        let s: ItemStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(s, ItemStatus::Workflow(WorkflowStatus::InProgress));

        let s: ItemStatus = serde_json::from_str("\"overdue\"").unwrap();
        assert_eq!(s, ItemStatus::Generic(GenericStatus::Overdue));
    }

    #[test]
    fn test_due_offset_days() {
        assert_eq!(GenericStatus::OnTrack.due_offset_days(), 7);
        assert_eq!(GenericStatus::Delayed.due_offset_days(), 3);
        assert_eq!(GenericStatus::Overdue.due_offset_days(), 0);
    }
}
