// ==========================================
// 数据权限管理系统 - API层错误类型
// ==========================================
// 职责: 面向调用方的错误归口，导入层错误透明上抛
// ==========================================

use crate::importer::error::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    /// 本地导入错误（空输入 / 校验失败），原样上抛
    #[error(transparent)]
    Import(#[from] ImportError),

    /// 同一导入实例已有批次在途（防止重复提交）
    #[error("已有批量导入在进行中，请等待其完成")]
    SubmissionInFlight,

    /// 远端请求失败（传输层或非 2xx 响应）
    #[error("远端请求失败: {0}")]
    Remote(String),

    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
