// ==========================================
// 数据权限管理系统 - 配置层
// ==========================================
// 职责: 导入相关的少量运行配置（环境变量覆写）
// ==========================================

use serde::Deserialize;

/// 批量导入运行配置
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    /// 远端服务基础地址
    pub api_base_url: String,
    /// 默认是否逐项同步传播到底层权限系统
    pub batch_sync: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".to_string(),
            batch_sync: false,
        }
    }
}

impl ImportConfig {
    /// 从环境变量读取，缺省回退默认值
    ///
    /// - `PERM_ADMIN_API_BASE_URL`: 远端基础地址
    /// - `PERM_ADMIN_BATCH_SYNC`: "1" / "true" 开启逐项同步
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_base_url =
            std::env::var("PERM_ADMIN_API_BASE_URL").unwrap_or(defaults.api_base_url);
        let batch_sync = std::env::var("PERM_ADMIN_BATCH_SYNC")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(defaults.batch_sync);

        Self {
            api_base_url,
            batch_sync,
        }
    }
}
