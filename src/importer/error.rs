// ==========================================
// 数据权限管理系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 原则: 所有本地校验错误带行号，一次呈现全部问题
// ==========================================

use std::fmt;
use thiserror::Error;

/// 单行内的一个校验问题
///
/// 同一行可以同时存在多个问题，校验器不会在首个问题处停止
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineIssue {
    /// 字段数量不足（hint 描述该资源至少需要哪些字段）
    #[error("格式不正确，{hint}")]
    Format { hint: &'static str },

    /// 必填字段位置存在但内容为空
    #[error("{field}不能为空")]
    MissingField { field: &'static str },

    /// 枚举字段取值非法（消息包含全部合法值）
    #[error("{field}必须是以下之一: {allowed}")]
    EnumViolation {
        field: &'static str,
        value: String,
        allowed: String,
    },

    /// 数值字段非法（不可解析或 <= 0）
    #[error("{field}必须是大于0的数值")]
    InvalidNumber { field: &'static str, value: String },

    /// 用户名与角色名同时为空
    #[error("用户名和角色名至少填一个")]
    SubjectRequired,
}

/// 一行的全部校验问题（按发现顺序）
#[derive(Debug, Clone, PartialEq)]
pub struct LineError {
    /// 1-based 行号，按原始粘贴文本计（空行也占号）
    pub line_number: usize,
    pub issues: Vec<LineIssue>,
}

impl LineError {
    pub fn new(line_number: usize, issues: Vec<LineIssue>) -> Self {
        Self {
            line_number,
            issues,
        }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self
            .issues
            .iter()
            .map(|issue| issue.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "第 {} 行: {}", self.line_number, messages)
    }
}

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    /// 粘贴文本去除空白后没有任何数据行
    #[error("请输入数据")]
    EmptyInput,

    /// 本地校验失败（全量拒绝，不发起网络调用）
    #[error("数据校验失败，共 {} 行存在问题", .0.len())]
    Validation(Vec<LineError>),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
