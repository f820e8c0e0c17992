use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^@]*@[^@]*\.[^@]*$").unwrap());

/// 宽松的邮箱格式检查：空串视为"未提供"，判定为有效
pub fn is_valid_email(email: &str) -> bool {
    email.is_empty() || EMAIL.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn empty_is_valid() {
        assert!(is_valid_email(""));
    }

    #[test]
    fn loose_shape_check() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a.b@c.d.e"));
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("a@b@c.d"));
    }
}
