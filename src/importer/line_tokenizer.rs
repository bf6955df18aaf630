// ==========================================
// 数据权限管理系统 - 行分词器
// ==========================================
// 职责: 粘贴文本 -> 带行号的字段数组（阶段 0）
// 规则: 按 \n 分行，连续 , 或 \t 视作一个分隔符
// ==========================================

use crate::importer::error::{ImportError, ImportResult};

/// 一行已分词的导入数据
///
/// 行号按原始文本的 1-based 位置计：空行被丢弃但不让出行号，
/// 保证错误消息与操作员编辑器中看到的行一一对应
#[derive(Debug, Clone, PartialEq)]
pub struct ImportLine {
    pub line_number: usize,
    pub raw_text: String,
    pub fields: Vec<String>,
}

/// 将粘贴文本切分为非空行并逐行分词
///
/// - 按 `\n` 分行，去掉行尾 `\r`
/// - trim 后为空的行被丢弃（行号保留）
/// - 每行按一个或多个连续的 `,` / `\t` 切分字段，字段两侧空白去除
///
/// 若没有任何非空行，返回 `ImportError::EmptyInput`
pub fn tokenize(text: &str) -> ImportResult<Vec<ImportLine>> {
    let mut lines = Vec::new();

    for (index, raw) in text.split('\n').enumerate() {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        if raw.trim().is_empty() {
            continue;
        }

        lines.push(ImportLine {
            line_number: index + 1,
            raw_text: raw.to_string(),
            fields: split_fields(raw.trim()),
        });
    }

    if lines.is_empty() {
        return Err(ImportError::EmptyInput);
    }

    Ok(lines)
}

/// 按连续分隔符运行切分字段
///
/// 语义等同于 `split(/[,\t]+/)`：行首/行尾的分隔符会产生空字段，
/// 中间的连续分隔符只算一个
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_separator = false;

    for ch in line.chars() {
        if ch == ',' || ch == '\t' {
            if !in_separator {
                fields.push(current.trim().to_string());
                current = String::new();
                in_separator = true;
            }
        } else {
            current.push(ch);
            in_separator = false;
        }
    }
    fields.push(current.trim().to_string());

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_keeps_original_line_numbers() {
        // 第 2 行为空行：被丢弃但不重新编号
        let lines = tokenize("a,b\n\n c , d \t e").unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].line_number, 1);
        assert_eq!(lines[0].fields, vec!["a", "b"]);
        assert_eq!(lines[1].line_number, 3);
        assert_eq!(lines[1].fields, vec!["c", "d", "e"]);
    }

    #[test]
    fn test_tokenize_strips_carriage_return() {
        let lines = tokenize("db,table\r\ndb2,table2\r\n").unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].fields, vec!["db", "table"]);
        assert_eq!(lines[1].fields, vec!["db2", "table2"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(matches!(tokenize(""), Err(ImportError::EmptyInput)));
        assert!(matches!(tokenize("  \n\t\n  "), Err(ImportError::EmptyInput)));
    }

    #[test]
    fn test_split_fields_collapses_separator_runs() {
        // 连续分隔符只算一个：中间的空字段被吞掉
        assert_eq!(split_fields("a,,b"), vec!["a", "b"]);
        assert_eq!(split_fields("a,\tb"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_fields_trailing_separator_yields_empty_field() {
        assert_eq!(split_fields("test_db,users,admin,"), vec![
            "test_db", "users", "admin", ""
        ]);
    }

    #[test]
    fn test_tokenize_rejoin_idempotent() {
        // 幂等性：字段以单个逗号重接后再分词，字段序列不变
        let lines = tokenize("db , users\t admin+guest , manager").unwrap();
        let rejoined = lines[0].fields.join(",");
        let again = tokenize(&rejoined).unwrap();
        assert_eq!(again[0].fields, lines[0].fields);
    }
}
