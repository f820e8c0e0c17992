//! 临时文件
//!
use crate::error::DomainResult;
use tempfile::{Builder, NamedTempFile};
use tracing::debug;

/// 按给定配置（前缀、后缀、目录等）创建临时文件，并以读写句柄交给 `f`；
/// 返回后无论成功与否都会删除该文件
///
/// 句柄同时提供 `path()`，便于交给需要文件路径的外部工具。
/// `f` 与删除同时失败时，返回 `f` 的错误。
pub fn with_temp_file<T, F>(builder: &Builder<'_, '_>, f: F) -> DomainResult<T>
where
    F: FnOnce(&mut NamedTempFile) -> std::io::Result<T>,
{
    let mut file = builder.tempfile()?;
    debug!(path = %file.path().display(), "temp file created");

    let result = f(&mut file);
    let closed = file.close();
    let value = result?;
    closed?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Seek, SeekFrom, Write};
    use std::path::PathBuf;

    #[test]
    fn file_is_readable_writable_and_removed() {
        let mut builder = Builder::new();
        builder.prefix("upload-").suffix(".dat");

        let mut path = PathBuf::new();
        let content = with_temp_file(&builder, |file| {
            path = file.path().to_path_buf();
            file.write_all(b"hello")?;
            file.seek(SeekFrom::Start(0))?;
            let mut buf = String::new();
            file.read_to_string(&mut buf)?;
            Ok(buf)
        })
        .unwrap();

        assert_eq!(content, "hello");
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("upload-"));
        assert!(name.ends_with(".dat"));
        assert!(!path.exists());
    }

    #[test]
    fn file_is_removed_when_callback_fails() {
        let mut path = PathBuf::new();
        let err = with_temp_file(&Builder::new(), |file| {
            path = file.path().to_path_buf();
            file.write_all(b"x")?;
            Err::<(), _>(std::io::Error::other("boom"))
        })
        .unwrap_err();

        assert!(err.to_string().contains("boom"));
        assert!(!path.exists());
    }

    #[test]
    fn callback_error_wins_over_cleanup_error() {
        // 回调中提前删除文件，使随后的清理也失败
        let err = with_temp_file(&Builder::new(), |file| {
            std::fs::remove_file(file.path())?;
            Err::<(), _>(std::io::Error::other("boom"))
        })
        .unwrap_err();

        assert!(err.to_string().contains("boom"), "{err}");
    }

    #[test]
    fn cleanup_error_is_reported_when_callback_succeeds() {
        let err = with_temp_file(&Builder::new(), |file| std::fs::remove_file(file.path()))
            .unwrap_err();

        assert!(matches!(err, crate::error::DomainError::Io { .. }));
    }
}
