// ==========================================
// 数据权限管理系统 - 领域层
// ==========================================
// 职责: 资源种类、脱敏类型与授权记录的领域定义
// ==========================================

pub mod grant;
pub mod types;

// 重导出核心类型
pub use grant::{
    ColumnPermissionRecord, GrantRecord, HdfsQuotaRecord, RowPermissionRecord,
    TablePermissionRecord,
};
pub use types::{MaskType, ResourceKind};
