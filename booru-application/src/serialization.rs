use crate::error::AppResult;
use crate::params::RequestParams;
use booru_domain::field_selector::{SerializableEntity, serialize_fields};
use serde_json::{Map, Value};

/// 字段选择参数名
pub const FIELDS_PARAM: &str = "fields";

/// 请求中的字段选择（可选）
pub fn serialization_options(params: &RequestParams) -> AppResult<Option<Vec<String>>> {
    params.get_param_as_list(FIELDS_PARAM)
}

/// 按请求的 `fields` 参数序列化实体；实体缺失时返回 `None`
pub fn serialize_for_request<E>(
    entity: Option<&E>,
    params: &RequestParams,
) -> AppResult<Option<Map<String, Value>>>
where
    E: SerializableEntity + ?Sized,
{
    let options = serialization_options(params)?;
    Ok(serialize_fields(entity, options.as_deref())?)
}
