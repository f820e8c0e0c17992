//! 按字段选择的实体序列化
//!
//! 每个实体提供一个字段注册表（字段名 -> 零参数工厂）。调用方可以指定只需要其中
//! 部分字段；未被请求的字段工厂永远不会被调用，因为部分工厂可能代价高昂
//! （例如加载关联记录）。
//!
use crate::error::{DomainError, DomainResult};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// 单个字段的惰性工厂
pub type FieldFactory<'a> = Box<dyn Fn() -> DomainResult<Value> + 'a>;

/// 字段注册表，保持注册顺序
#[derive(Default)]
pub struct FieldRegistry<'a> {
    factories: IndexMap<String, FieldFactory<'a>>,
}

impl<'a> FieldRegistry<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一个产出任意可序列化值的字段
    pub fn field<T, F>(self, name: impl Into<String>, factory: F) -> Self
    where
        T: Serialize,
        F: Fn() -> T + 'a,
    {
        self.value(name, move || Ok(serde_json::to_value(factory())?))
    }

    /// 注册一个直接产出 JSON 值的字段
    pub fn value<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> DomainResult<Value> + 'a,
    {
        self.insert(name, Box::new(factory));
        self
    }

    /// 注册字段；同名字段会被覆盖
    pub fn insert(&mut self, name: impl Into<String>, factory: FieldFactory<'a>) {
        self.factories.insert(name.into(), factory);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// 按注册顺序返回全部字段名
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    fn invalid_key(&self, key: &str) -> DomainError {
        let mut valid: Vec<&str> = self.names().collect();
        valid.sort_unstable();
        let valid = valid
            .iter()
            .map(|name| format!("'{name}'"))
            .collect::<Vec<_>>()
            .join(", ");
        DomainError::validation(format!("Invalid key: '{key}'. Valid keys: [{valid}]."))
    }
}

impl std::fmt::Debug for FieldRegistry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRegistry")
            .field("fields", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// 自带字段注册表的实体
pub trait SerializableEntity {
    fn field_registry(&self) -> FieldRegistry<'_>;
}

/// 按请求字段序列化实体
///
/// - `entity` 为 `None` 时直接返回 `Ok(None)`，不查看注册表；
/// - `requested` 为 `None` 或空时输出全部字段（按注册顺序）；
/// - 请求中出现未注册的字段名时返回 `Validation` 错误，列出排序后的合法字段名；
/// - 重复的字段名只输出一次，其工厂也只调用一次。
pub fn serialize_entity<E>(
    entity: Option<&E>,
    registry: &FieldRegistry<'_>,
    requested: Option<&[String]>,
) -> DomainResult<Option<Map<String, Value>>>
where
    E: ?Sized,
{
    if entity.is_none() {
        return Ok(None);
    }

    let names: Vec<&str> = match requested {
        Some(fields) if !fields.is_empty() => fields.iter().map(String::as_str).collect(),
        _ => registry.names().collect(),
    };

    let mut out = Map::new();
    for name in names {
        if out.contains_key(name) {
            continue;
        }
        let Some(factory) = registry.factories.get(name) else {
            warn!(field = name, "unknown field requested");
            return Err(registry.invalid_key(name));
        };
        out.insert(name.to_string(), factory()?);
    }

    debug!(fields = out.len(), "entity serialized");
    Ok(Some(out))
}

/// `serialize_entity` 的便捷形式：注册表由实体自身提供
pub fn serialize_fields<E>(
    entity: Option<&E>,
    requested: Option<&[String]>,
) -> DomainResult<Option<Map<String, Value>>>
where
    E: SerializableEntity + ?Sized,
{
    match entity {
        Some(entity) => serialize_entity(Some(entity), &entity.field_registry(), requested),
        None => Ok(None),
    }
}
