// ==========================================
// 珠宝生产流水线工作台 - 阶段目录
// ==========================================
// 职责: 阶段键规范化 + 阶段配置表（单一参数化表,
//       替代前端原型里按阶段名展开的六份近似分支）
// 降级策略: 未命名阶段回退为通用词表与默认图标/配色,
//           "degrade, don't crash"
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 阶段键 (Stage Key)
// ==========================================

/// 小写阶段标识
///
/// 六个命名阶段: design / cad / casting / setting / polishing / qc;
/// 其余任意非空小写名称均可接受, 语义降级为通用词表。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StageKey(String);

impl StageKey {
    /// 规范化解析: 去首尾空白并转小写; 空串视为非法
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(StageKey(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ==========================================
// 阶段词表 (Stage Vocabulary)
// ==========================================

/// 阶段使用哪套状态词表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StageVocabulary {
    /// 工艺词表 (review/approved/revise, 可选 in-progress)
    /// design/cad 不含 in-progress, casting/setting/polishing/qc 含
    Workflow { allows_in_progress: bool },

    /// 通用词表 (on-track/delayed/overdue)
    Generic,
}

impl StageVocabulary {
    pub fn is_workflow(&self) -> bool {
        matches!(self, StageVocabulary::Workflow { .. })
    }
}

// ==========================================
// 阶段配置 (Stage Config)
// ==========================================

/// 单个阶段的展示与词表配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageConfig {
    /// 阶段键
    pub key: StageKey,

    /// 显示名 (如 "Design" / "CAD")
    pub label: String,

    /// 图标 token（由前端图标库解释）
    pub icon: String,

    /// 强调色 token
    pub accent: String,

    /// 状态词表
    pub vocabulary: StageVocabulary,
}

// ==========================================
// 阶段目录 (Stage Catalog)
// ==========================================

/// 流水线固定顺序的六个命名阶段
pub const PIPELINE_STAGES: [&str; 6] = ["design", "cad", "casting", "setting", "polishing", "qc"];

/// 阶段配置目录
///
/// 命名阶段查表返回固定配置; 未命名阶段合成一个通用降级条目
/// （首字母大写的标签 + 默认图标/配色 + 通用词表）。
pub struct StageCatalog;

impl StageCatalog {
    /// 按流水线顺序返回六个命名阶段的配置
    pub fn pipeline() -> Vec<StageConfig> {
        PIPELINE_STAGES
            .iter()
            .filter_map(|key| Self::named_config(key))
            .collect()
    }

    /// 查询阶段配置, 未命名阶段降级为通用条目
    pub fn config_for(key: &StageKey) -> StageConfig {
        Self::named_config(key.as_str()).unwrap_or_else(|| StageConfig {
            key: key.clone(),
            label: capitalize(key.as_str()),
            icon: "layers".to_string(),
            accent: "slate".to_string(),
            vocabulary: StageVocabulary::Generic,
        })
    }

    fn named_config(key: &str) -> Option<StageConfig> {
        let (label, icon, accent, vocabulary) = match key {
            "design" => (
                "Design",
                "pencil-ruler",
                "blue",
                StageVocabulary::Workflow {
                    allows_in_progress: false,
                },
            ),
            "cad" => (
                "CAD",
                "box",
                "purple",
                StageVocabulary::Workflow {
                    allows_in_progress: false,
                },
            ),
            "casting" => (
                "Casting",
                "flame",
                "orange",
                StageVocabulary::Workflow {
                    allows_in_progress: true,
                },
            ),
            "setting" => (
                "Setting",
                "gem",
                "amber",
                StageVocabulary::Workflow {
                    allows_in_progress: true,
                },
            ),
            "polishing" => (
                "Polishing",
                "sparkles",
                "pink",
                StageVocabulary::Workflow {
                    allows_in_progress: true,
                },
            ),
            "qc" => (
                "QC",
                "badge-check",
                "green",
                StageVocabulary::Workflow {
                    allows_in_progress: true,
                },
            ),
            _ => return None,
        };

        Some(StageConfig {
            key: StageKey(key.to_string()),
            label: label.to_string(),
            icon: icon.to_string(),
            accent: accent.to_string(),
            vocabulary,
        })
    }
}

/// 首字母大写（未命名阶段的降级标签）
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_key_normalization() {
        assert_eq!(StageKey::parse("  Design ").unwrap().as_str(), "design");
        assert_eq!(StageKey::parse("QC").unwrap().as_str(), "qc");
        assert!(StageKey::parse("   ").is_none());
        assert!(StageKey::parse("").is_none());
    }

    #[test]
    fn test_pipeline_order() {
        let labels: Vec<String> = StageCatalog::pipeline()
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(
            labels,
            vec!["Design", "CAD", "Casting", "Setting", "Polishing", "QC"]
        );
    }

    #[test]
    fn test_in_progress_only_for_later_stages() {
        for key in ["design", "cad"] {
            let config = StageCatalog::config_for(&StageKey::parse(key).unwrap());
            assert_eq!(
                config.vocabulary,
                StageVocabulary::Workflow {
                    allows_in_progress: false
                }
            );
        }
        for key in ["casting", "setting", "polishing", "qc"] {
            let config = StageCatalog::config_for(&StageKey::parse(key).unwrap());
            assert_eq!(
                config.vocabulary,
                StageVocabulary::Workflow {
                    allows_in_progress: true
                }
            );
        }
    }

    #[test]
    fn test_unknown_stage_degrades_to_generic() {
        let config = StageCatalog::config_for(&StageKey::parse("engraving").unwrap());
        assert_eq!(config.label, "Engraving");
        assert_eq!(config.icon, "layers");
        assert_eq!(config.vocabulary, StageVocabulary::Generic);
    }
}
