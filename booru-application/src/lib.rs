//! booru 应用层（booru-application）
//!
//! 在一次请求范围内编排领域构件：
//! - 显式传递的配置（`config`）与请求上下文（`context`）
//! - 请求参数的类型化读取（`params`）
//! - 带版本校验的实体变更（`versioning`）与按字段的响应序列化（`serialization`）
//! - 密码重置用例（`password_reset`）
//!
pub mod config;
pub mod context;
pub mod error;
pub mod params;
pub mod password_reset;
pub mod serialization;
pub mod versioning;

pub use config::AppConfig;
pub use context::AppContext;
pub use error::{AppError, AppResult};
pub use params::RequestParams;
