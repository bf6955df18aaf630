// ==========================================
// 数据权限管理系统 - API 层
// ==========================================
// 职责: 批量导入的对外接口与远端客户端 Trait
// ==========================================

pub mod batch_import_api;
pub mod error;

// 重导出核心类型
pub use batch_import_api::{BatchImportApi, BatchImportClient};
pub use error::{ApiError, ApiResult};
