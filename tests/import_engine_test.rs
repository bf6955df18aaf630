// ==========================================
// 数据权限管理系统 - 批量导入引擎集成测试
// ==========================================
// 覆盖: 分词 -> 校验 -> 配对展开 -> 装配 -> 提交 -> 结果合并 全链路
// ==========================================

use async_trait::async_trait;
use data_perm_admin::api::{ApiError, ApiResult, BatchImportApi, BatchImportClient};
use data_perm_admin::importer::{
    assemble, report_local_rejection, tokenize, BatchImportRequest, BatchImportResult,
    ImportError,
};
use data_perm_admin::{GrantRecord, MaskType, ResourceKind};
use std::sync::Arc;
use std::sync::Mutex;

// ==========================================
// MockClient - 记录提交内容并回放固定响应
// ==========================================
struct MockClient {
    response_json: String,
    submitted: Mutex<Vec<(ResourceKind, serde_json::Value)>>,
}

impl MockClient {
    fn new(response_json: &str) -> Self {
        Self {
            response_json: response_json.to_string(),
            submitted: Mutex::new(Vec::new()),
        }
    }

    fn submitted_count(&self) -> usize {
        self.submitted.lock().unwrap().len()
    }

    fn last_payload(&self) -> serde_json::Value {
        self.submitted.lock().unwrap().last().unwrap().1.clone()
    }
}

#[async_trait]
impl BatchImportClient for MockClient {
    async fn submit(
        &self,
        kind: ResourceKind,
        request: &BatchImportRequest,
    ) -> ApiResult<BatchImportResult> {
        let payload = serde_json::to_value(request)
            .map_err(|e| ApiError::InternalError(e.to_string()))?;
        self.submitted.lock().unwrap().push((kind, payload));
        serde_json::from_str(&self.response_json).map_err(|e| ApiError::Remote(e.to_string()))
    }
}

// ==========================================
// 分词与行号
// ==========================================

#[test]
fn test_tokenizer_preserves_blank_line_numbering() {
    let lines = tokenize("a,b\n\n c , d \t e").unwrap();

    assert_eq!(lines.len(), 2);
    assert_eq!(
        (lines[0].line_number, lines[0].fields.clone()),
        (1, vec!["a".to_string(), "b".to_string()])
    );
    assert_eq!(
        (lines[1].line_number, lines[1].fields.clone()),
        (
            3,
            vec!["c".to_string(), "d".to_string(), "e".to_string()]
        )
    );
}

// ==========================================
// 表权限全链路
// ==========================================

#[tokio::test]
async fn test_table_import_end_to_end() {
    let client = Arc::new(MockClient::new(r#"{"success": 3, "failed": 0}"#));
    let api = BatchImportApi::new(client.clone());

    // 第 1 行按位配对展开为 2 条，第 2 行 1 条
    let text = "test_db,users,admin+guest,manager+viewer\ntest_db,orders,,auditor";
    let report = api.import(ResourceKind::Table, text, false).await.unwrap();

    assert!(report.is_fully_successful());
    assert_eq!(report.success_count, 3);
    assert_eq!(client.submitted_count(), 1);

    let payload = client.last_payload();
    assert_eq!(payload["batch_sync"], false);
    let items = payload["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    // 位置配对，不是笛卡尔积
    assert_eq!(items[0]["user_name"], "admin");
    assert_eq!(items[0]["role_name"], "manager");
    assert_eq!(items[1]["user_name"], "guest");
    assert_eq!(items[1]["role_name"], "viewer");
    assert_eq!(items[2]["user_name"], "");
    assert_eq!(items[2]["role_name"], "auditor");
}

#[tokio::test]
async fn test_invalid_line_blocks_whole_batch() {
    let client = Arc::new(MockClient::new(r#"{"success": 0, "failed": 0}"#));
    let api = BatchImportApi::new(client.clone());

    // 第 2 行缺主体：其余行有效也不提交
    let text = "db,t1,admin,\ndb,t2,,\ndb,t3,,viewer";
    let result = api.import(ResourceKind::Table, text, false).await;

    match result {
        Err(ApiError::Import(ImportError::Validation(errors))) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].line_number, 2);
        }
        other => panic!("期望本地校验拒绝，实际: {:?}", other.map(|r| r.messages)),
    }
    assert_eq!(client.submitted_count(), 0);
}

// ==========================================
// 字段权限：枚举校验与展开
// ==========================================

#[test]
fn test_column_enum_violation_lists_all_values() {
    let err = assemble("db,t,col,badtype,admin,", ResourceKind::Column, false).unwrap_err();

    let ImportError::Validation(errors) = err else {
        panic!("期望校验错误");
    };
    assert_eq!(errors.len(), 1);

    let report = report_local_rejection(&errors);
    let message = &report.messages[0];
    assert!(message.starts_with("第 1 行"));
    for mask in MaskType::ALL {
        assert!(
            message.contains(mask.as_str()),
            "错误消息应列出合法值 {}: {}",
            mask.as_str(),
            message
        );
    }
}

#[tokio::test]
async fn test_column_import_asymmetric_pairing() {
    let client = Arc::new(MockClient::new(r#"{"success": 2, "failed": 0}"#));
    let api = BatchImportApi::new(client.clone());

    let text = "test_db,users,id_card,身份证,user1,manager+viewer";
    let report = api.import(ResourceKind::Column, text, true).await.unwrap();
    assert!(report.is_fully_successful());

    let payload = client.last_payload();
    assert_eq!(payload["batch_sync"], true);
    let items = payload["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["user_name"], "user1");
    assert_eq!(items[0]["role_name"], "manager");
    assert_eq!(items[1]["user_name"], "");
    assert_eq!(items[1]["role_name"], "viewer");
    assert_eq!(items[0]["mask_type"], "身份证");
}

// ==========================================
// 行权限：单值主体（不展开）
// ==========================================

#[tokio::test]
async fn test_row_import_without_expansion() {
    let client = Arc::new(MockClient::new(r#"{"success": 1, "failed": 0}"#));
    let api = BatchImportApi::new(client.clone());

    let text = "test_db,orders,region = 'east',analyst,";
    api.import(ResourceKind::Row, text, false).await.unwrap();

    let payload = client.last_payload();
    let items = payload["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["row_filter"], "region = 'east'");
    assert_eq!(items[0]["user_name"], "analyst");
}

// ==========================================
// 配额：数值校验
// ==========================================

#[test]
fn test_quota_numeric_validation() {
    for bad in ["db,-5", "db,abc"] {
        assert!(
            matches!(
                assemble(bad, ResourceKind::Quota, false),
                Err(ImportError::Validation(_))
            ),
            "输入 {:?} 应被拒绝",
            bad
        );
    }

    let request = assemble("db,100\ndb2,200.5", ResourceKind::Quota, false).unwrap();
    assert_eq!(request.items.len(), 2);
    match (&request.items[0], &request.items[1]) {
        (GrantRecord::Quota(a), GrantRecord::Quota(b)) => {
            assert_eq!(a.hdfs_quota, 100.0);
            assert_eq!(b.hdfs_quota, 200.5);
        }
        other => panic!("期望配额记录，实际: {:?}", other),
    }
}

// ==========================================
// 远端部分失败合并
// ==========================================

#[tokio::test]
async fn test_partial_remote_failure_merged_into_report() {
    let client = Arc::new(MockClient::new(
        r#"{
            "success": 1,
            "failed": 2,
            "errors": [
                {"index": 1, "msg": "权限记录已存在"},
                "角色 viewer 不存在"
            ],
            "sync_errors": [
                {"nested": {"code": 500}}
            ]
        }"#,
    ));
    let api = BatchImportApi::new(client);

    let text = "db_a,t,admin,\ndb_b,t,guest,\ndb_c,t,,viewer";
    let report = api.import(ResourceKind::Table, text, false).await.unwrap();

    assert!(!report.is_fully_successful());
    assert_eq!(report.success_count, 1);
    assert_eq!(report.failed_count, 2);

    let body = report.messages.join("\n");
    // 下标回查提交记录，补出数据库名上下文
    assert!(body.contains("权限记录已存在"));
    assert!(body.contains("db_b"));
    assert!(body.contains("角色 viewer 不存在"));
    // 无法识别的形状按原始 JSON 呈现，不被吞掉
    assert!(body.contains("同步错误"));
    assert!(body.contains("\"nested\""));
    assert!(body.contains("500"));
}

// ==========================================
// 空输入
// ==========================================

#[tokio::test]
async fn test_empty_input_rejected_before_submission() {
    let client = Arc::new(MockClient::new(r#"{"success": 0, "failed": 0}"#));
    let api = BatchImportApi::new(client.clone());

    let result = api.import(ResourceKind::Quota, "  \n\t\n", false).await;
    assert!(matches!(
        result,
        Err(ApiError::Import(ImportError::EmptyInput))
    ));
    assert_eq!(client.submitted_count(), 0);
}
