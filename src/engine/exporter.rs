// ==========================================
// 珠宝生产流水线工作台 - CSV 导出引擎
// ==========================================
// 职责: 将筛选/排序后的条目列表序列化为 CSV
// 契约: 表头固定为 Order ID,Item Name,Customer,Due Date,Status,Notes;
//       含逗号/双引号/换行的字段用双引号包裹, 内部双引号成对转义
// 规模: 全量在内存中物化（条目量级为几十, 不做流式）
// ==========================================

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::instrument;

use crate::domain::item::ProductionItem;

/// CSV 表头（字面量契约, 前端解析方依赖逐字节一致）
pub const CSV_HEADER: [&str; 6] = [
    "Order ID",
    "Item Name",
    "Customer",
    "Due Date",
    "Status",
    "Notes",
];

// ==========================================
// 导出错误
// ==========================================
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV 序列化失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("导出文件写入失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 输出不是合法 UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

// ==========================================
// CsvExporter - CSV 导出引擎
// ==========================================
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    /// 导出文件名: {StageLabel}_stage_export.csv
    pub fn file_name(stage_label: &str) -> String {
        format!("{}_stage_export.csv", stage_label)
    }

    /// 序列化为 CSV 字符串
    ///
    /// 引号规则由 csv crate 的 Necessary 策略保证:
    /// 仅在字段含分隔符/引号/换行时加引号, 内部引号成对转义
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub fn to_csv(&self, items: &[ProductionItem]) -> Result<String, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer.write_record(CSV_HEADER)?;
        for item in items {
            writer.write_record([
                item.id.as_str(),
                item.name.as_str(),
                item.customer.as_str(),
                item.due_date.as_str(),
                item.status.as_token(),
                item.notes.as_deref().unwrap_or(""),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))?;
        Ok(String::from_utf8(bytes)?)
    }

    /// 导出到目录, 返回完整文件路径
    #[instrument(skip(self, items), fields(count = items.len(), label = stage_label))]
    pub fn write_to_dir(
        &self,
        dir: &Path,
        stage_label: &str,
        items: &[ProductionItem],
    ) -> Result<PathBuf, ExportError> {
        let content = self.to_csv(items)?;
        fs::create_dir_all(dir)?;

        let path = dir.join(Self::file_name(stage_label));
        fs::write(&path, content)?;

        tracing::info!(path = %path.display(), "CSV 导出完成");
        Ok(path)
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}
