use crate::config::AppConfig;
use crate::params::RequestParams;
use std::sync::Arc;

/// 应用层上下文（Application Context）
///
/// 承载一次请求所需的横切信息，以具名字段代替动态属性字典：
/// - 配置（`config`）：由应用启动时加载，在请求间共享；
/// - 请求参数（`params`）：合并后的查询参数与请求体；
/// - 执行者与关联 ID：用于日志与审计。
///
/// 典型用法：
/// ```rust
/// use booru_application::{AppConfig, AppContext, RequestParams};
/// use std::sync::Arc;
///
/// let ctx = AppContext::new(Arc::new(AppConfig::default()))
///     .with_params(RequestParams::new().with("version", 1))
///     .with_actor("u-1");
/// assert_eq!(ctx.actor_id.as_deref(), Some("u-1"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub params: RequestParams,
    /// 发起请求的主体 ID（匿名时为空）
    pub actor_id: Option<String>,
    /// 关联 ID（可选），用于串联一次请求的日志
    pub correlation_id: Option<String>,
}

impl AppContext {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn with_params(mut self, params: RequestParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_actor(mut self, actor_id: impl Into<String>) -> Self {
        self.actor_id = Some(actor_id.into());
        self
    }

    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }
}
