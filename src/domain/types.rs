// ==========================================
// 数据权限管理系统 - 领域基础类型
// ==========================================
// 职责: 资源种类与脱敏类型的枚举定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 资源种类
// ==========================================

/// 批量导入支持的资源种类
///
/// 每种资源对应一个独立的批量导入端点与字段模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// 表权限
    Table,
    /// 字段权限（含脱敏）
    Column,
    /// 行权限（过滤条件）
    Row,
    /// HDFS 存储配额
    Quota,
}

impl ResourceKind {
    /// 远端批量导入端点路径
    pub fn batch_endpoint(&self) -> &'static str {
        match self {
            ResourceKind::Table => "/table-permissions/batch",
            ResourceKind::Column => "/column-permissions/batch",
            ResourceKind::Row => "/row-permissions/batch",
            ResourceKind::Quota => "/hdfs-quotas/batch-import",
        }
    }

    /// 中文显示名（用于日志与报告）
    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceKind::Table => "表权限",
            ResourceKind::Column => "字段权限",
            ResourceKind::Row => "行权限",
            ResourceKind::Quota => "HDFS配额",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(ResourceKind::Table),
            "column" => Ok(ResourceKind::Column),
            "row" => Ok(ResourceKind::Row),
            "quota" => Ok(ResourceKind::Quota),
            other => Err(format!("未知的资源种类: {}", other)),
        }
    }
}

// ==========================================
// 脱敏类型
// ==========================================

/// 字段权限的脱敏类型（固定六值枚举）
///
/// 导入文本中以中文原样书写，与远端契约保持一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaskType {
    #[serde(rename = "手机号")]
    Phone,
    #[serde(rename = "身份证")]
    IdCard,
    #[serde(rename = "银行卡号")]
    BankCard,
    #[serde(rename = "座机号")]
    Landline,
    #[serde(rename = "姓名")]
    Name,
    #[serde(rename = "原文")]
    Plain,
}

impl MaskType {
    /// 全部合法值（保持展示顺序）
    pub const ALL: [MaskType; 6] = [
        MaskType::Phone,
        MaskType::IdCard,
        MaskType::BankCard,
        MaskType::Landline,
        MaskType::Name,
        MaskType::Plain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaskType::Phone => "手机号",
            MaskType::IdCard => "身份证",
            MaskType::BankCard => "银行卡号",
            MaskType::Landline => "座机号",
            MaskType::Name => "姓名",
            MaskType::Plain => "原文",
        }
    }

    /// 解析中文脱敏类型，非法值返回 None
    pub fn parse(value: &str) -> Option<MaskType> {
        MaskType::ALL.iter().copied().find(|m| m.as_str() == value)
    }

    /// 合法值列表的展示文本（用于校验错误消息）
    pub fn allowed_values() -> String {
        MaskType::ALL
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for MaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
