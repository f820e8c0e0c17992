//! 文本与映射辅助函数
//!
use indexmap::IndexMap;
use std::hash::Hash;

/// `last_login_time` -> `lastLoginTime`
///
/// 首段保持原样，其后各段首字母大写后直接拼接；空段（连续下划线）被忽略。
pub fn snake_case_to_lower_camel_case(text: &str) -> String {
    let mut segments = text.split('_');
    let mut out = String::with_capacity(text.len());
    if let Some(first) = segments.next() {
        out.push_str(first);
    }
    for word in segments {
        let mut chars = word.chars();
        if let Some(head) = chars.next() {
            out.extend(head.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// 转换映射顶层的全部键，值与顺序保持不变
pub fn snake_case_to_lower_camel_case_keys<V>(
    source: impl IntoIterator<Item = (String, V)>,
) -> IndexMap<String, V> {
    source
        .into_iter()
        .map(|(key, value)| (snake_case_to_lower_camel_case(&key), value))
        .collect()
}

/// 忽略大小写去重，保留首次出现的原始写法与顺序
pub fn icase_unique<I, S>(source: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = std::collections::HashSet::new();
    let mut target = Vec::new();
    for item in source {
        let text: &str = item.as_ref();
        if seen.insert(text.to_lowercase()) {
            target.push(text.to_string());
        }
    }
    target
}

/// 一个值可能以多个别名登记
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aliases<K> {
    One(K),
    Many(Vec<K>),
}

impl<K> From<K> for Aliases<K> {
    fn from(key: K) -> Self {
        Aliases::One(key)
    }
}

/// 将以别名列表为键的条目展开为每个别名一条
pub fn unalias_dict<K, V>(source: impl IntoIterator<Item = (Aliases<K>, V)>) -> IndexMap<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    let mut out = IndexMap::new();
    for (aliases, value) in source {
        match aliases {
            Aliases::One(key) => {
                out.insert(key, value);
            }
            Aliases::Many(keys) => {
                for key in keys {
                    out.insert(key, value.clone());
                }
            }
        }
    }
    out
}

/// 键值互换；多个键对应同一值时后出现者胜出
pub fn flip<K, V>(source: impl IntoIterator<Item = (K, V)>) -> IndexMap<V, K>
where
    V: Hash + Eq,
{
    source.into_iter().map(|(k, v)| (v, k)).collect()
}

/// 值的字符数是否超过上限；空值或无上限时永不超过
pub fn value_exceeds_length(value: Option<&str>, max_length: Option<usize>) -> bool {
    match (value, max_length) {
        (Some(value), Some(max)) if !value.is_empty() => value.chars().count() > max,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_camel_case() {
        assert_eq!(snake_case_to_lower_camel_case("last_login_time"), "lastLoginTime");
        assert_eq!(snake_case_to_lower_camel_case("name"), "name");
        assert_eq!(snake_case_to_lower_camel_case(""), "");
        assert_eq!(snake_case_to_lower_camel_case("post__count"), "postCount");
        assert_eq!(snake_case_to_lower_camel_case("_private"), "Private");
    }

    #[test]
    fn camel_case_keys_keep_values_and_order() {
        let source = vec![
            ("user_name".to_string(), 1),
            ("avatar_style".to_string(), 2),
            ("rank".to_string(), 3),
        ];
        let out = snake_case_to_lower_camel_case_keys(source);
        assert_eq!(
            out.into_iter().collect::<Vec<_>>(),
            vec![
                ("userName".to_string(), 1),
                ("avatarStyle".to_string(), 2),
                ("rank".to_string(), 3),
            ]
        );
    }

    #[test]
    fn icase_unique_keeps_first_spelling() {
        assert_eq!(
            icase_unique(["Foo", "foo", "BAR", "bar", "Foo"]),
            vec!["Foo".to_string(), "BAR".to_string()]
        );
        assert!(icase_unique(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn unalias_expands_each_alias() {
        let out = unalias_dict(vec![
            (Aliases::Many(vec!["safe", "sfw"]), 1),
            (Aliases::from("unsafe"), 2),
        ]);
        assert_eq!(out.get("safe"), Some(&1));
        assert_eq!(out.get("sfw"), Some(&1));
        assert_eq!(out.get("unsafe"), Some(&2));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn flip_swaps_keys_and_values() {
        let out = flip(vec![("a", 1), ("b", 2)]);
        assert_eq!(out.get(&1), Some(&"a"));
        assert_eq!(out.get(&2), Some(&"b"));
    }

    #[test]
    fn length_limit() {
        assert!(!value_exceeds_length(None, Some(3)));
        assert!(!value_exceeds_length(Some(""), Some(0)));
        assert!(!value_exceeds_length(Some("abcd"), None));
        assert!(!value_exceeds_length(Some("abc"), Some(3)));
        assert!(value_exceeds_length(Some("abcd"), Some(3)));
        // 按字符计数而不是字节
        assert!(!value_exceeds_length(Some("日本語"), Some(3)));
    }
}
