//! 应用配置
//!
//! 配置以显式结构体传入需要它的组件（经由 `AppContext`），不存在进程级全局配置。
//! 加载顺序（后者覆盖前者）：内置默认值 -> TOML 文件（可选）-> `BOORU_` 前缀的环境变量。
//!
use crate::error::{AppError, AppResult};
use bon::Builder;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 服务端密钥，供令牌生成等黑盒组件使用
    #[builder(into)]
    pub secret: String,
    /// 对外访问的根地址，例如 `http://example.com/`
    #[builder(into)]
    pub base_url: String,
    /// 实例名称，出现在邮件发件人与标题中
    #[builder(into)]
    pub name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            base_url: "http://localhost/".to_string(),
            name: "booru".to_string(),
        }
    }
}

impl AppConfig {
    pub const ENV_PREFIX: &'static str = "BOORU_";

    /// 组装配置来源
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(Self::ENV_PREFIX))
    }

    /// 从给定来源提取并校验配置
    pub fn from_figment(figment: &Figment) -> AppResult<Self> {
        let config: AppConfig = figment
            .extract()
            .map_err(|err| AppError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let config = Self::from_figment(&Self::figment(path))?;
        debug!(name = %config.name, base_url = %config.base_url, "configuration loaded");
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Config("name must not be empty".into()));
        }
        if self.base_url.trim().is_empty() {
            return Err(AppError::Config("base_url must not be empty".into()));
        }
        Ok(())
    }

    /// 基于 `base_url` 拼接站内链接
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// 系统邮件的发件人
    pub fn mail_sender(&self) -> String {
        format!("noreply@{}", self.name)
    }
}
