// ==========================================
// 数据权限管理系统 - 结果报告器
// ==========================================
// 职责: 合并本地校验错误与远端逐项失败，生成操作员可读报告
// 契约: 远端错误载荷形状不一（字符串/对象/其他），一律按展示文本处理
// ==========================================

use crate::domain::grant::GrantRecord;
use crate::importer::error::LineError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ==========================================
// 远端响应类型（仅消费，不拥有）
// ==========================================

/// 远端批量端点的响应
#[derive(Debug, Clone, Deserialize)]
pub struct BatchImportResult {
    /// 成功条数
    pub success: u64,
    /// 失败条数
    pub failed: u64,
    /// 逐项失败（创建阶段）
    #[serde(default)]
    pub errors: Vec<RemoteErrorEntry>,
    /// 逐项失败（向底层权限系统同步阶段）
    #[serde(default)]
    pub sync_errors: Vec<RemoteErrorEntry>,
}

/// 远端单项错误（异构载荷的显式归类）
///
/// 无法识别的形状保留原始 JSON 文本渲染，绝不静默丢弃
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteErrorEntry {
    /// 纯字符串错误
    Text(String),
    /// 带消息字段（error/msg/detail 之一）的对象，可附定位上下文
    Detail(RemoteErrorDetail),
    /// 无法识别的形状，按原始 JSON 渲染
    Other(Value),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoteErrorDetail {
    /// 提交批次内的位置下标（远端按序回报时给出）
    pub index: Option<usize>,
    /// 远端记录 ID
    pub id: Option<i64>,
    /// 远端直接给出的数据库名
    pub db_name: Option<String>,
    pub message: String,
}

impl<'de> Deserialize<'de> for RemoteErrorEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(RemoteErrorEntry::classify(value))
    }
}

impl RemoteErrorEntry {
    /// 归类原始 JSON 值：字符串 / 带消息字段的对象 / 其他
    fn classify(value: Value) -> Self {
        match value {
            Value::String(text) => RemoteErrorEntry::Text(text),
            Value::Object(map) => {
                let message = ["error", "msg", "detail"]
                    .iter()
                    .find_map(|key| map.get(*key).and_then(Value::as_str))
                    .map(str::to_string);

                match message {
                    Some(message) => RemoteErrorEntry::Detail(RemoteErrorDetail {
                        index: map
                            .get("index")
                            .and_then(Value::as_u64)
                            .map(|v| v as usize),
                        id: map.get("id").and_then(Value::as_i64),
                        db_name: map
                            .get("db_name")
                            .and_then(Value::as_str)
                            .map(str::to_string),
                        message,
                    }),
                    None => RemoteErrorEntry::Other(Value::Object(map)),
                }
            }
            other => RemoteErrorEntry::Other(other),
        }
    }
}

// ==========================================
// 导入报告
// ==========================================

/// 面向操作员的导入结果报告
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport {
    pub success_count: u64,
    pub failed_count: u64,
    /// 报告正文，一行一条
    pub messages: Vec<String>,
}

impl ImportReport {
    pub fn is_fully_successful(&self) -> bool {
        self.failed_count == 0
    }
}

/// 本地全量拒绝的报告：按行号排序逐行呈现，未发起任何提交
pub fn report_local_rejection(errors: &[LineError]) -> ImportReport {
    let mut sorted: Vec<&LineError> = errors.iter().collect();
    sorted.sort_by_key(|error| error.line_number);

    ImportReport {
        success_count: 0,
        failed_count: sorted.len() as u64,
        messages: sorted.iter().map(|error| error.to_string()).collect(),
    }
}

/// 远端响应的报告
///
/// - 全部成功: 只报成功条数
/// - 部分失败: 成功/失败计数 + 逐项失败，带可用的定位上下文
///   （按下标回查提交记录的数据库名）
pub fn report_remote(result: &BatchImportResult, items: &[GrantRecord]) -> ImportReport {
    let mut messages = Vec::new();

    if result.failed == 0 && result.errors.is_empty() && result.sync_errors.is_empty() {
        messages.push(format!("成功导入 {} 条记录", result.success));
    } else {
        messages.push(format!(
            "成功 {} 条，失败 {} 条",
            result.success, result.failed
        ));
        for (seq, entry) in result.errors.iter().enumerate() {
            messages.push(render_entry("错误", seq, entry, items));
        }
        for (seq, entry) in result.sync_errors.iter().enumerate() {
            messages.push(render_entry("同步错误", seq, entry, items));
        }
    }

    ImportReport {
        success_count: result.success,
        failed_count: result.failed,
        messages,
    }
}

fn render_entry(
    label: &str,
    seq: usize,
    entry: &RemoteErrorEntry,
    items: &[GrantRecord],
) -> String {
    match entry {
        RemoteErrorEntry::Text(text) => format!("{} {}: {}", label, seq + 1, text),
        RemoteErrorEntry::Detail(detail) => {
            let db_name = detail
                .db_name
                .clone()
                .or_else(|| {
                    detail
                        .index
                        .and_then(|index| items.get(index))
                        .map(|record| record.db_name().to_string())
                });

            match db_name {
                Some(db_name) => format!(
                    "{} {}: {}（数据库: {}）",
                    label,
                    seq + 1,
                    detail.message,
                    db_name
                ),
                None => format!("{} {}: {}", label, seq + 1, detail.message),
            }
        }
        // 无法识别的形状：按原始 JSON 文本呈现
        RemoteErrorEntry::Other(value) => format!("{} {}: {}", label, seq + 1, value),
    }
}
