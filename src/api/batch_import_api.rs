// ==========================================
// 数据权限管理系统 - 批量导入 API
// ==========================================
// 职责: 本地校验 -> 单一在途提交 -> 远端结果合并
// 约束: 同一实例至多一个在途批次，防止重复远端记录
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::types::ResourceKind;
use crate::importer::batch_assembler::{assemble, BatchImportRequest};
use crate::importer::result_reporter::{report_remote, BatchImportResult, ImportReport};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// ==========================================
// 远端客户端 Trait（传输实现在本子系统之外）
// ==========================================

/// 批量导入的远端提交接口
///
/// 实现方负责把请求 POST 到 `kind.batch_endpoint()` 并解析响应；
/// 重试、鉴权与 HTTP 错误翻译都属于实现方的职责
#[async_trait]
pub trait BatchImportClient: Send + Sync {
    async fn submit(
        &self,
        kind: ResourceKind,
        request: &BatchImportRequest,
    ) -> ApiResult<BatchImportResult>;
}

// ==========================================
// 批量导入 API
// ==========================================

/// 一个导入对话框实例对应一个 `BatchImportApi`
///
/// 提交在途期间再次提交会被 `ApiError::SubmissionInFlight` 拒绝；
/// 本子系统不做重试，失败后由操作员编辑后重新提交
pub struct BatchImportApi<C: BatchImportClient> {
    client: Arc<C>,
    in_flight: AtomicBool,
}

/// 在途标志守卫：提交结束（含失败路径）自动释放
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

impl<C: BatchImportClient> BatchImportApi<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            in_flight: AtomicBool::new(false),
        }
    }

    /// 仅做本地校验与装配，不触网（操作员预览 / CLI 干跑）
    pub fn validate(
        &self,
        kind: ResourceKind,
        text: &str,
        batch_sync: bool,
    ) -> ApiResult<BatchImportRequest> {
        Ok(assemble(text, kind, batch_sync)?)
    }

    /// 校验、提交并合并远端结果
    ///
    /// - 本地校验失败: `ApiError::Import`（整批拒绝，未触网）
    /// - 已有在途批次: `ApiError::SubmissionInFlight`
    /// - 远端受理: 返回合并后的导入报告（可能含逐项失败）
    pub async fn import(
        &self,
        kind: ResourceKind,
        text: &str,
        batch_sync: bool,
    ) -> ApiResult<ImportReport> {
        let request = assemble(text, kind, batch_sync)?;

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(ApiError::SubmissionInFlight);
        }
        let _guard = InFlightGuard {
            flag: &self.in_flight,
        };

        tracing::info!(
            resource = %kind,
            endpoint = kind.batch_endpoint(),
            item_count = request.items.len(),
            "提交批量导入请求"
        );

        let result = self.client.submit(kind, &request).await?;

        if result.failed > 0 {
            tracing::warn!(
                resource = %kind,
                success = result.success,
                failed = result.failed,
                "远端部分失败，需人工核对后重新提交失败行"
            );
        }

        Ok(report_remote(&result, &request.items))
    }
}
