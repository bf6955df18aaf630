// ==========================================
// 数据权限管理系统 - 批次装配器
// ==========================================
// 职责: 全文校验 + 全量聚合，产出远端批量请求信封
// 策略: 全有或全无 —— 任一行失败则整批本地拒绝，不发起网络调用
// ==========================================

use crate::domain::grant::GrantRecord;
use crate::domain::types::ResourceKind;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_schema::FieldSchema;
use crate::importer::line_tokenizer::tokenize;
use crate::importer::line_validator::validate_line;
use serde::Serialize;

/// 远端批量导入请求信封
///
/// 记录顺序保持原始行序与行内配对序（远端可能按下标回报失败）
#[derive(Debug, Clone, Serialize)]
pub struct BatchImportRequest {
    pub items: Vec<GrantRecord>,
    pub batch_sync: bool,
}

/// 校验整段粘贴文本并装配批量请求
///
/// - 无有效数据行: `ImportError::EmptyInput`
/// - 任一行校验失败: `ImportError::Validation`（收齐所有行的所有错误）
/// - 全部通过: 所有记录按行序装入信封
pub fn assemble(
    text: &str,
    kind: ResourceKind,
    batch_sync: bool,
) -> ImportResult<BatchImportRequest> {
    let schema = FieldSchema::for_kind(kind);
    let lines = tokenize(text)?;

    tracing::debug!(
        resource = %kind,
        line_count = lines.len(),
        "批量导入开始本地校验"
    );

    let mut records = Vec::new();
    let mut line_errors = Vec::new();

    for line in &lines {
        match validate_line(line, schema) {
            Ok(mut line_records) => records.append(&mut line_records),
            Err(error) => line_errors.push(error),
        }
    }

    if !line_errors.is_empty() {
        tracing::info!(
            resource = %kind,
            error_lines = line_errors.len(),
            "本地校验失败，整批拒绝"
        );
        return Err(ImportError::Validation(line_errors));
    }

    tracing::info!(
        resource = %kind,
        record_count = records.len(),
        batch_sync,
        "本地校验通过，批次装配完成"
    );

    Ok(BatchImportRequest {
        items: records,
        batch_sync,
    })
}
