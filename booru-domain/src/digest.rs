/// MD5 摘要的小写十六进制表示；文本按 UTF-8 字节计算
pub fn get_md5(source: impl AsRef<[u8]>) -> String {
    format!("{:x}", md5::compute(source.as_ref()))
}
