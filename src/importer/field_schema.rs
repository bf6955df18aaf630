// ==========================================
// 数据权限管理系统 - 字段模式
// ==========================================
// 职责: 每种资源的必填字段、校验规则与主体扩展开关（静态配置）
// ==========================================

use crate::domain::types::ResourceKind;

/// 单个必填字段的校验规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// 非空文本
    NonEmpty,
    /// 脱敏类型枚举成员
    MaskType,
    /// 大于 0 的数值
    PositiveNumber,
}

/// 必填字段声明（位置即列序）
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rule: FieldRule,
}

/// 资源种类的字段模式（静态，一种资源一份，永不变更）
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    pub kind: ResourceKind,
    /// 必填字段（位置从 0 开始）
    pub required: &'static [FieldSpec],
    /// 可选字段名（位于必填字段之后，仅作文档用途）
    pub optional: &'static [&'static str],
    /// 字段数下限，不足即整行格式错误
    pub min_fields: usize,
    /// 格式错误消息中的字段提示
    pub format_hint: &'static str,
    /// 是否带 user/role 主体字段（配额没有）
    pub has_subjects: bool,
    /// 是否对主体字段做 `+` 多值扩展
    ///
    /// 行权限在现网行为中不做扩展，保留为开关以便将来统一打开
    pub expand_subjects: bool,
}

const TABLE_SCHEMA: FieldSchema = FieldSchema {
    kind: ResourceKind::Table,
    required: &[
        FieldSpec {
            name: "数据库名",
            rule: FieldRule::NonEmpty,
        },
        FieldSpec {
            name: "表名",
            rule: FieldRule::NonEmpty,
        },
    ],
    optional: &["用户名", "角色名"],
    min_fields: 2,
    format_hint: "至少需要数据库名和表名",
    has_subjects: true,
    expand_subjects: true,
};

const COLUMN_SCHEMA: FieldSchema = FieldSchema {
    kind: ResourceKind::Column,
    required: &[
        FieldSpec {
            name: "数据库名",
            rule: FieldRule::NonEmpty,
        },
        FieldSpec {
            name: "表名",
            rule: FieldRule::NonEmpty,
        },
        FieldSpec {
            name: "列名",
            rule: FieldRule::NonEmpty,
        },
        FieldSpec {
            name: "脱敏类型",
            rule: FieldRule::MaskType,
        },
    ],
    optional: &["用户名", "角色名"],
    min_fields: 4,
    format_hint: "至少需要数据库名、表名、列名和脱敏类型",
    has_subjects: true,
    expand_subjects: true,
};

const ROW_SCHEMA: FieldSchema = FieldSchema {
    kind: ResourceKind::Row,
    required: &[
        FieldSpec {
            name: "数据库名",
            rule: FieldRule::NonEmpty,
        },
        FieldSpec {
            name: "表名",
            rule: FieldRule::NonEmpty,
        },
        FieldSpec {
            name: "行过滤条件",
            rule: FieldRule::NonEmpty,
        },
    ],
    optional: &["用户名", "角色名"],
    min_fields: 2,
    format_hint: "至少需要数据库名和表名",
    has_subjects: true,
    expand_subjects: false,
};

const QUOTA_SCHEMA: FieldSchema = FieldSchema {
    kind: ResourceKind::Quota,
    required: &[
        FieldSpec {
            name: "数据库名",
            rule: FieldRule::NonEmpty,
        },
        FieldSpec {
            name: "HDFS配额",
            rule: FieldRule::PositiveNumber,
        },
    ],
    optional: &[],
    min_fields: 2,
    format_hint: "需要数据库名和HDFS配额",
    has_subjects: false,
    expand_subjects: false,
};

impl FieldSchema {
    /// 取资源种类对应的静态模式
    pub fn for_kind(kind: ResourceKind) -> &'static FieldSchema {
        match kind {
            ResourceKind::Table => &TABLE_SCHEMA,
            ResourceKind::Column => &COLUMN_SCHEMA,
            ResourceKind::Row => &ROW_SCHEMA,
            ResourceKind::Quota => &QUOTA_SCHEMA,
        }
    }

    /// 主体字段（用户名/角色名）在行内的起始列
    pub fn subject_offset(&self) -> usize {
        self.required.len()
    }
}
