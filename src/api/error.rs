// ==========================================
// 珠宝生产流水线工作台 - API 层错误类型
// ==========================================
// 职责: 定义 API 层错误分类, 把引擎层错误转换为
//       可向用户解释的业务错误
// 约束: 所有错误信息必须包含显式原因
// ==========================================

use thiserror::Error;

use crate::engine::exporter::ExportError;
use crate::engine::refresh::RefreshError;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入与查询错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    /// 看板尚未生成（需要先刷新一次）
    #[error("看板尚未生成, 请先刷新")]
    BoardNotReady,

    // ==========================================
    // 刷新与导出错误
    // ==========================================
    /// 刷新被更新的请求取代（非致命信号, 前端可静默忽略）
    #[error("刷新已被更新的请求取代")]
    RefreshSuperseded,

    #[error("导出失败: {0}")]
    ExportError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// API 结果类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 引擎层错误转换
// ==========================================

impl From<RefreshError> for ApiError {
    fn from(err: RefreshError) -> Self {
        match err {
            RefreshError::Superseded => ApiError::RefreshSuperseded,
            RefreshError::Provider(e) => ApiError::InternalError(format!("阶段数据加载失败: {}", e)),
            RefreshError::Internal(msg) => ApiError::InternalError(msg),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

impl ApiError {
    /// 稳定错误码（返回给前端的 code 字段）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::BoardNotReady => "BOARD_NOT_READY",
            ApiError::RefreshSuperseded => "REFRESH_SUPERSEDED",
            ApiError::ExportError(_) => "EXPORT_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
            ApiError::Other(_) => "OTHER_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superseded_maps_to_dedicated_variant() {
        let err: ApiError = RefreshError::Superseded.into();
        assert!(matches!(err, ApiError::RefreshSuperseded));
        assert_eq!(err.code(), "REFRESH_SUPERSEDED");
    }

    #[test]
    fn test_export_error_carries_reason() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ApiError = ExportError::Io(io).into();
        assert_eq!(err.code(), "EXPORT_ERROR");
        assert!(err.to_string().contains("denied"));
    }
}
