//! booru 领域层基础库（booru-domain）
//!
//! 提供无状态、同步的领域构件：
//! - 实体（`entity`）与版本号值对象（`value_object`）
//! - 乐观并发控制（`version_guard`）：基于版本号比对检测并发修改
//! - 按字段选择的实体序列化（`field_selector`）：仅对请求字段惰性求值
//! - 用户实体（`user`）
//! - 通用辅助：命名转换与去重（`text`）、日期范围解析（`time_range`）、
//!   摘要（`digest`）、邮箱格式校验（`email`）、临时文件（`temp_file`）
//!
//! 典型用法：
//! 1. 用 `#[entity]` 定义实体，获得 `id`/`version` 字段与 `Entity` 实现；
//! 2. 变更前调用 `version_guard::verify`，变更成功后调用 `version_guard::bump`；
//! 3. 为实体实现 `SerializableEntity`，通过 `serialize_fields` 输出响应。
//!
pub mod digest;
pub mod email;
pub mod entity;
pub mod error;
pub mod field_selector;
pub mod temp_file;
pub mod text;
pub mod time_range;
pub mod user;
pub mod value_object;
pub mod version_guard;

pub use booru_macros::{entity, value_object};

// 允许在本 crate 内部通过 ::booru_domain 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::booru_domain 路径。
extern crate self as booru_domain;
