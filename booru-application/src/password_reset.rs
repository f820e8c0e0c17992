//! 密码重置用例
//!
//! 两步流程：
//! 1. `request_reset`：向用户邮箱发送带重置令牌的链接；
//! 2. `confirm_reset`：校验请求中的 `token`，生成并设置新密码后返回明文新密码。
//!
//! 用户存储、邮件投递、令牌生成与密码哈希均为外部组件，此处只负责编排。
//!
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::versioning::bump_version;
use async_trait::async_trait;
use booru_domain::user::User;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 令牌参数名
pub const TOKEN_PARAM: &str = "token";

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 按用户名或邮箱查找用户
    async fn find_by_name_or_email(&self, name_or_email: &str) -> AppResult<Option<User>>;

    async fn save(&self, user: &User) -> AppResult<()>;
}

#[async_trait]
impl<T> UserRepository for Arc<T>
where
    T: UserRepository + ?Sized,
{
    async fn find_by_name_or_email(&self, name_or_email: &str) -> AppResult<Option<User>> {
        (**self).find_by_name_or_email(name_or_email).await
    }

    async fn save(&self, user: &User) -> AppResult<()> {
        (**self).save(user).await
    }
}

/// 一封待发送的邮件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mail {
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_mail(&self, mail: Mail) -> AppResult<()>;
}

/// 令牌与密码相关的黑盒能力
pub trait PasswordResetAuth: Send + Sync {
    /// 用户当前有效的重置令牌
    fn reset_token(&self, config: &AppConfig, user: &User) -> String;

    /// 生成一个新的随机明文密码
    fn create_password(&self) -> String;

    /// 为用户设置新密码（更新哈希与盐）
    fn set_password(&self, user: &mut User, password: &str);
}

pub struct PasswordResetService<R, M, A> {
    users: R,
    mailer: M,
    auth: A,
}

impl<R, M, A> PasswordResetService<R, M, A>
where
    R: UserRepository,
    M: Mailer,
    A: PasswordResetAuth,
{
    pub fn new(users: R, mailer: M, auth: A) -> Self {
        Self {
            users,
            mailer,
            auth,
        }
    }

    /// 发送重置链接
    pub async fn request_reset(&self, ctx: &AppContext, name_or_email: &str) -> AppResult<()> {
        let user = self.find_user(name_or_email).await?;
        let Some(email) = user.email_address() else {
            warn!(user = %user.name, "password reset requested for user without email");
            return Err(AppError::Validation(format!(
                "User '{}' hasn't supplied email. Cannot reset password.",
                user.name
            )));
        };

        let config = ctx.config.as_ref();
        let token = self.auth.reset_token(config, &user);
        let link = config.url(&format!("password-reset/{}:{}", user.name, token));
        let mail = Mail {
            sender: config.mail_sender(),
            recipient: email.to_string(),
            subject: format!("Password reset for {}", config.name),
            body: format!(
                "You (or someone else) requested to reset your password on {}.\n\
                 If you wish to proceed, click this link: {}\n\
                 Otherwise, please ignore this email.",
                config.name, link
            ),
        };

        self.mailer.send_mail(mail).await?;
        info!(
            user = %user.name,
            actor_id = ctx.actor_id.as_deref(),
            correlation_id = ctx.correlation_id.as_deref(),
            "password reset mail sent"
        );
        Ok(())
    }

    /// 校验令牌并重置密码，返回新的明文密码
    pub async fn confirm_reset(&self, ctx: &AppContext, name_or_email: &str) -> AppResult<String> {
        let mut user = self.find_user(name_or_email).await?;
        let token = ctx.params.require_param_as_string(TOKEN_PARAM)?;

        if token != self.auth.reset_token(&ctx.config, &user) {
            warn!(user = %user.name, "invalid password reset token");
            return Err(AppError::Validation(
                "Invalid password reset token.".to_string(),
            ));
        }

        let password = self.auth.create_password();
        self.auth.set_password(&mut user, &password);
        bump_version(&mut user);
        self.users.save(&user).await?;

        info!(
            user = %user.name,
            actor_id = ctx.actor_id.as_deref(),
            correlation_id = ctx.correlation_id.as_deref(),
            "password reset confirmed"
        );
        Ok(password)
    }

    async fn find_user(&self, name_or_email: &str) -> AppResult<User> {
        debug!(name_or_email, "looking up user for password reset");
        self.users
            .find_by_name_or_email(name_or_email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User '{name_or_email}' not found.")))
    }
}
