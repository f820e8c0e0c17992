//! 请求参数
//!
//! 合并后的查询参数/请求体，以 JSON 值保存，按需以字符串、整数或列表读取。
//! 缺失必填参数返回 `MissingParameter`，类型不符返回 `InvalidParameter`，
//! 两者都属于调用方应修正的输入错误。
//!
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestParams {
    values: Map<String, Value>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以链式方式追加参数
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    // `null` 与缺失等价
    fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).filter(|v| !v.is_null())
    }

    pub fn get_param_as_string(&self, name: &str) -> AppResult<Option<String>> {
        let Some(value) = self.get(name) else {
            return Ok(None);
        };
        match value {
            Value::String(s) => Ok(Some(s.clone())),
            Value::Number(n) => Ok(Some(n.to_string())),
            Value::Bool(b) => Ok(Some(b.to_string())),
            _ => Err(invalid(name, "expected a string")),
        }
    }

    pub fn require_param_as_string(&self, name: &str) -> AppResult<String> {
        self.get_param_as_string(name)?.ok_or_else(|| missing(name))
    }

    pub fn get_param_as_int(&self, name: &str) -> AppResult<Option<i64>> {
        let Some(value) = self.get(name) else {
            return Ok(None);
        };
        let parsed = match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        parsed
            .map(Some)
            .ok_or_else(|| invalid(name, "expected an integer"))
    }

    pub fn require_param_as_int(&self, name: &str) -> AppResult<i64> {
        self.get_param_as_int(name)?.ok_or_else(|| missing(name))
    }

    /// 列表参数：JSON 数组，或逗号分隔的单个字符串（`fields=a,b`）
    pub fn get_param_as_list(&self, name: &str) -> AppResult<Option<Vec<String>>> {
        let Some(value) = self.get(name) else {
            return Ok(None);
        };
        match value {
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    Value::Number(n) => Ok(n.to_string()),
                    _ => Err(invalid(name, "expected a list of strings")),
                })
                .collect::<AppResult<Vec<_>>>()
                .map(Some),
            Value::String(s) => Ok(Some(
                s.split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect(),
            )),
            _ => Err(invalid(name, "expected a list of strings")),
        }
    }
}

impl From<Map<String, Value>> for RequestParams {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

fn missing(name: &str) -> AppError {
    warn!(param = name, "required parameter missing");
    AppError::MissingParameter {
        name: name.to_string(),
    }
}

fn invalid(name: &str, reason: &str) -> AppError {
    warn!(param = name, reason, "invalid parameter");
    AppError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
