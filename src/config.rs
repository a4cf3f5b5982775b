use std::fs;
use std::io;
use std::path::Path;

use crate::models::Fixtures;

/// 从 TOML 文件加载展示夹具；文件不存在时使用内置默认值。
/// 只读：会话状态永远不会写回磁盘。
pub fn load_fixtures(path: &Path) -> io::Result<Fixtures> {
    if !path.exists() {
        return Ok(Fixtures::default());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let fixtures = load_fixtures(Path::new("/nonexistent/fixtures.toml")).unwrap();
        assert_eq!(fixtures, Fixtures::default());
    }
}
