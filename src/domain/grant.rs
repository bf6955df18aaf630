// ==========================================
// 数据权限管理系统 - 授权记录实体
// ==========================================
// 职责: 批量导入产出的各类资源记录（不可变值对象）
// 序列化形状与远端批量端点的 items 元素一致
// ==========================================

use crate::domain::types::{MaskType, ResourceKind};
use serde::Serialize;

/// 表权限记录
///
/// user_name / role_name 至多一个为空，不会同时为空
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablePermissionRecord {
    pub db_name: String,
    pub table_name: String,
    pub user_name: String,
    pub role_name: String,
}

/// 字段权限记录（含脱敏类型）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnPermissionRecord {
    pub db_name: String,
    pub table_name: String,
    pub col_name: String,
    pub mask_type: MaskType,
    pub user_name: String,
    pub role_name: String,
}

/// 行权限记录
///
/// row_filter 为不透明谓词文本，本子系统只校验非空
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowPermissionRecord {
    pub db_name: String,
    pub table_name: String,
    pub row_filter: String,
    pub user_name: String,
    pub role_name: String,
}

/// HDFS 配额记录（无主体字段）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HdfsQuotaRecord {
    pub db_name: String,
    /// 配额数值（GB），必须大于 0
    pub hdfs_quota: f64,
}

// ==========================================
// 统一授权记录
// ==========================================

/// 批量导入的统一记录类型
///
/// 序列化时不带标签，直接展开为各资源的字段结构
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GrantRecord {
    Table(TablePermissionRecord),
    Column(ColumnPermissionRecord),
    Row(RowPermissionRecord),
    Quota(HdfsQuotaRecord),
}

impl GrantRecord {
    pub fn kind(&self) -> ResourceKind {
        match self {
            GrantRecord::Table(_) => ResourceKind::Table,
            GrantRecord::Column(_) => ResourceKind::Column,
            GrantRecord::Row(_) => ResourceKind::Row,
            GrantRecord::Quota(_) => ResourceKind::Quota,
        }
    }

    /// 所属数据库名（所有资源种类共有，用于失败报告的定位上下文）
    pub fn db_name(&self) -> &str {
        match self {
            GrantRecord::Table(r) => &r.db_name,
            GrantRecord::Column(r) => &r.db_name,
            GrantRecord::Row(r) => &r.db_name,
            GrantRecord::Quota(r) => &r.db_name,
        }
    }
}
