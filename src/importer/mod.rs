// ==========================================
// 数据权限管理系统 - 导入层
// ==========================================
// 职责: 粘贴文本 -> 校验 -> 批量请求信封 -> 结果报告
// 流程: 分词 -> 字段模式校验 -> 主体配对展开 -> 批次装配 -> 结果合并
// ==========================================

// 模块声明
pub mod batch_assembler;
pub mod error;
pub mod field_schema;
pub mod line_tokenizer;
pub mod line_validator;
pub mod result_reporter;
pub mod subject_expander;

// 重导出核心类型
pub use batch_assembler::{assemble, BatchImportRequest};
pub use error::{ImportError, ImportResult, LineError, LineIssue};
pub use field_schema::{FieldRule, FieldSchema, FieldSpec};
pub use line_tokenizer::{tokenize, ImportLine};
pub use line_validator::validate_line;
pub use result_reporter::{
    report_local_rejection, report_remote, BatchImportResult, ImportReport, RemoteErrorDetail,
    RemoteErrorEntry,
};
pub use subject_expander::{expand, split_subject_list, SubjectPair};
