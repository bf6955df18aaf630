// ==========================================
// 数据权限管理系统 - 核心库
// ==========================================
// 职责: 批量文本导入引擎（表/字段/行权限与 HDFS 配额）
// 定位: 管理后台的导入子系统，UI 与 HTTP 传输在本库之外
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 资源种类与授权记录
pub mod domain;

// 导入层 - 分词/校验/展开/装配/报告
pub mod importer;

// 配置层 - 运行配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 导入接口与远端客户端 Trait
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    ColumnPermissionRecord, GrantRecord, HdfsQuotaRecord, MaskType, ResourceKind,
    RowPermissionRecord, TablePermissionRecord,
};

// 导入引擎
pub use importer::{
    assemble, tokenize, validate_line, BatchImportRequest, BatchImportResult, FieldSchema,
    ImportError, ImportLine, ImportReport, ImportResult, LineError, LineIssue, RemoteErrorEntry,
};

// API
pub use api::{ApiError, ApiResult, BatchImportApi, BatchImportClient};

// 配置
pub use config::ImportConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "数据权限管理系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
