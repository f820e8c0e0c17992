//! booru 领域层过程宏
//!
//! - `#[entity]`：为结构体注入 `id`/`version` 字段并实现 `::booru_domain::entity::Entity`；
//! - `#[value_object]`：为值对象合并常用派生。
//!
use proc_macro::TokenStream;

mod entity;
mod utils;
mod value_object;

/// 实体宏
/// - 追加字段：`id: IdType`, `version: Version`（若缺失）并置于字段最前
/// - 自动实现 `::booru_domain::entity::Entity`（`new/id/version/set_version`）
/// - 支持参数：`#[entity(id = IdType, debug = true|false)]`，`id` 默认 `String`
#[proc_macro_attribute]
pub fn entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity::expand(attr, item)
}

/// 值对象宏
/// - 合并派生：Debug（可关闭）, Default, Clone, Serialize, Deserialize, PartialEq, Eq
/// - 支持参数：`#[value_object(debug = true|false)]`
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}
