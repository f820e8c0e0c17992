//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值。
//!

use std::fmt;

use booru_macros::value_object;

/// 版本号（用于乐观锁和并发控制）
///
/// 实体每次被成功修改后版本号加一，客户端提交修改时需携带其最后观察到的版本号。
///
/// # 示例
///
/// ```
/// use booru_domain::value_object::Version;
///
/// let v1 = Version::new();
/// assert_eq!(v1.value(), 0);
/// assert!(v1.is_new());
///
/// let v2 = v1.next();
/// assert_eq!(v2.value(), 1);
/// assert!(v2 > v1);
/// ```
// 使用 value_object 宏提供基础的派生（Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq）
// 手动添加 Version 特有的派生（Copy, PartialOrd, Ord, Hash）
#[value_object]
#[derive(Copy, PartialOrd, Ord, Hash)]
pub struct Version(usize);

impl Version {
    /// 创建初始版本（版本号为 0）
    pub const fn new() -> Self {
        Self(0)
    }

    /// 从值创建版本号
    pub const fn from_value(value: usize) -> Self {
        Self(value)
    }

    /// 获取下一个版本号
    ///
    /// ```
    /// use booru_domain::value_object::Version;
    ///
    /// let v = Version::from_value(10).next();
    /// assert_eq!(v.value(), 11);
    /// ```
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// 获取版本号的值
    pub const fn value(&self) -> usize {
        self.0
    }

    /// 检查是否为初始版本
    pub const fn is_new(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for Version {
    fn from(value: usize) -> Self {
        Self::from_value(value)
    }
}

impl From<Version> for usize {
    fn from(version: Version) -> Self {
        version.value()
    }
}
