//! 领域层统一错误定义
//!
//! 聚焦输入校验、版本冲突、序列化与 I/O 等最小必要集合，
//! 便于在应用层统一转换并映射为不同的响应状态。
//!
use crate::value_object::Version;
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    /// 调用方应修正的非法输入（字段名、日期格式等）
    #[error("{reason}")]
    Validation { reason: String },

    /// 乐观锁冲突：调用方持有的版本已过期
    #[error("Someone else modified this in the meantime. Please try again.")]
    VersionConflict { expected: Version, actual: Version },

    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl DomainError {
    pub fn validation(reason: impl Into<String>) -> Self {
        DomainError::Validation {
            reason: reason.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, DomainError::VersionConflict { .. })
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
