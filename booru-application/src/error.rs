use booru_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Validation(String),

    #[error("Required parameter '{name}' is missing.")]
    MissingParameter { name: String },

    #[error("Parameter '{name}' is invalid: {reason}.")]
    InvalidParameter { name: String, reason: String },

    #[error("{0}")]
    NotFound(String),

    #[error("config: {0}")]
    Config(String),

    #[error("infra: {0}")]
    Infra(String),
}

impl AppError {
    /// 对应的 HTTP 状态码：输入问题 400，未找到 404，版本冲突 409，其余 500
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Domain(DomainError::VersionConflict { .. }) => 409,
            AppError::NotFound(_) => 404,
            _ if self.is_validation() => 400,
            _ => 500,
        }
    }

    /// 是否属于调用方应修正的输入错误（缺失/非法参数也算在内）
    pub fn is_validation(&self) -> bool {
        match self {
            AppError::Domain(err) => err.is_validation(),
            AppError::Validation(_)
            | AppError::MissingParameter { .. }
            | AppError::InvalidParameter { .. } => true,
            _ => false,
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, AppError::Domain(err) if err.is_conflict())
    }
}

pub type AppResult<T> = Result<T, AppError>;
