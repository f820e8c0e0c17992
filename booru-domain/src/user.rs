//! 用户实体
//!
use crate::field_selector::{FieldRegistry, SerializableEntity};
use booru_macros::entity;

#[entity]
#[derive(Clone, PartialEq)]
pub struct User {
    pub name: String,
    pub email: Option<String>,
    pub rank: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(skip_serializing)]
    pub password_salt: String,
}

impl User {
    /// 非空的邮箱地址
    pub fn email_address(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }
}

// 密码相关字段永不对外输出
impl SerializableEntity for User {
    fn field_registry(&self) -> FieldRegistry<'_> {
        FieldRegistry::new()
            .field("name", move || self.name.clone())
            .field("email", move || self.email.clone())
            .field("rank", move || self.rank.clone())
            .field("version", move || self.version)
    }
}
