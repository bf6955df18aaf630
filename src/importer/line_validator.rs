// ==========================================
// 数据权限管理系统 - 行校验器
// ==========================================
// 职责: 单行字段数组 -> 授权记录列表 或 整行错误（纯函数）
// 原则: 不在首个问题处停止，一行的全部问题一次收齐
// ==========================================

use crate::domain::grant::{
    ColumnPermissionRecord, GrantRecord, HdfsQuotaRecord, RowPermissionRecord,
    TablePermissionRecord,
};
use crate::domain::types::{MaskType, ResourceKind};
use crate::importer::error::{LineError, LineIssue};
use crate::importer::field_schema::{FieldRule, FieldSchema};
use crate::importer::line_tokenizer::ImportLine;
use crate::importer::subject_expander::{expand, split_subject_list, SubjectPair};

/// 行内指定列的字段内容，越界按空串处理
fn field_at(line: &ImportLine, index: usize) -> &str {
    line.fields.get(index).map(String::as_str).unwrap_or("")
}

/// 校验一行并产出授权记录
///
/// 字段数不足直接判格式错误；否则依次跑必填规则与主体规则，
/// 把该行的所有问题收进同一个 `LineError`
pub fn validate_line(
    line: &ImportLine,
    schema: &FieldSchema,
) -> Result<Vec<GrantRecord>, LineError> {
    if line.fields.len() < schema.min_fields {
        return Err(LineError::new(
            line.line_number,
            vec![LineIssue::Format {
                hint: schema.format_hint,
            }],
        ));
    }

    let mut issues = Vec::new();
    let mut mask_type: Option<MaskType> = None;
    let mut quota_value: Option<f64> = None;

    // 必填字段规则
    for (index, spec) in schema.required.iter().enumerate() {
        let value = field_at(line, index);
        match spec.rule {
            FieldRule::NonEmpty => {
                if value.is_empty() {
                    issues.push(LineIssue::MissingField { field: spec.name });
                }
            }
            FieldRule::MaskType => {
                if value.is_empty() {
                    issues.push(LineIssue::MissingField { field: spec.name });
                } else {
                    match MaskType::parse(value) {
                        Some(mask) => mask_type = Some(mask),
                        None => issues.push(LineIssue::EnumViolation {
                            field: spec.name,
                            value: value.to_string(),
                            allowed: MaskType::allowed_values(),
                        }),
                    }
                }
            }
            FieldRule::PositiveNumber => match value.parse::<f64>() {
                Ok(number) if number > 0.0 => quota_value = Some(number),
                _ => issues.push(LineIssue::InvalidNumber {
                    field: spec.name,
                    value: value.to_string(),
                }),
            },
        }
    }

    // 主体规则：用户名和角色名至少填一个（扩展前判定）
    let user_field = field_at(line, schema.subject_offset());
    let role_field = field_at(line, schema.subject_offset() + 1);

    if schema.has_subjects {
        let both_raw_empty = user_field.is_empty() && role_field.is_empty();
        // 仅含 `+` 与空白的列表切分后为空，同样视为缺主体
        let both_lists_empty = schema.expand_subjects
            && split_subject_list(user_field).is_empty()
            && split_subject_list(role_field).is_empty();

        if both_raw_empty || both_lists_empty {
            issues.push(LineIssue::SubjectRequired);
        }
    }

    if !issues.is_empty() {
        return Err(LineError::new(line.line_number, issues));
    }

    // 校验全部通过，产出记录
    let records = match schema.kind {
        ResourceKind::Quota => {
            // 校验阶段已确认可解析且 > 0
            let hdfs_quota = quota_value.unwrap();
            vec![GrantRecord::Quota(HdfsQuotaRecord {
                db_name: field_at(line, 0).to_string(),
                hdfs_quota,
            })]
        }
        kind => {
            let pairs = if schema.expand_subjects {
                expand(user_field, role_field)
            } else {
                vec![SubjectPair {
                    user_name: user_field.to_string(),
                    role_name: role_field.to_string(),
                }]
            };

            pairs
                .into_iter()
                .map(|pair| build_record(kind, line, mask_type, pair))
                .collect()
        }
    };

    Ok(records)
}

fn build_record(
    kind: ResourceKind,
    line: &ImportLine,
    mask_type: Option<MaskType>,
    pair: SubjectPair,
) -> GrantRecord {
    let field_at = |index: usize| -> String {
        line.fields.get(index).cloned().unwrap_or_default()
    };

    match kind {
        ResourceKind::Table => GrantRecord::Table(TablePermissionRecord {
            db_name: field_at(0),
            table_name: field_at(1),
            user_name: pair.user_name,
            role_name: pair.role_name,
        }),
        ResourceKind::Column => GrantRecord::Column(ColumnPermissionRecord {
            db_name: field_at(0),
            table_name: field_at(1),
            col_name: field_at(2),
            // 校验阶段已确认枚举成员
            mask_type: mask_type.unwrap(),
            user_name: pair.user_name,
            role_name: pair.role_name,
        }),
        ResourceKind::Row => GrantRecord::Row(RowPermissionRecord {
            db_name: field_at(0),
            table_name: field_at(1),
            row_filter: field_at(2),
            user_name: pair.user_name,
            role_name: pair.role_name,
        }),
        ResourceKind::Quota => unreachable!("配额记录不走主体配对路径"),
    }
}
