//! 配置路径管理
//!
//! 持久化配置与通讯录保存在 ~/.addressbook/

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{APP_DIRECTORY, BOOK_FILE_NAME, CONFIG_FILE_NAME};
use crate::error::{errors, AddressBookResult};

/// 用户配置（从 config.json 读取）
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UserConfig {
    /// 通讯录文件路径（支持 ~ 展开）
    #[serde(default)]
    pub book_file: Option<String>,
    /// 默认日志级别
    #[serde(default)]
    pub log_level: Option<String>,
}

impl UserConfig {
    /// 从配置文件加载；文件不存在时返回默认值，无法读取或格式错误时返回 Config 错误
    pub fn load(config_file: &Path) -> AddressBookResult<Self> {
        if !config_file.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(config_file).map_err(|err| {
            errors::config_error(format!(
                "cannot read config {}: {}",
                config_file.display(),
                err
            ))
        })?;
        serde_json::from_str(&content).map_err(|err| {
            errors::config_error(format!(
                "invalid config {}: {}",
                config_file.display(),
                err
            ))
        })
    }

    /// 获取通讯录文件路径（支持 ~ 展开）
    pub fn get_book_file(&self) -> Option<PathBuf> {
        self.book_file.as_deref().map(expand_home)
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// 配置文件路径集合
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// 持久化配置目录（~/.addressbook/）
    pub config_dir: PathBuf,
    /// 用户配置（加载失败时为默认值）
    pub user_config: UserConfig,
    /// 加载配置失败的原因，日志系统就绪后由调用方记录
    pub load_warning: Option<String>,
}

impl ConfigPaths {
    /// 使用用户主目录创建配置路径
    pub fn new() -> AddressBookResult<Self> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| errors::config_error("Cannot find home directory"))?;
        Ok(Self::with_config_dir(home_dir.join(APP_DIRECTORY)))
    }

    /// 使用自定义配置目录（用于测试）
    pub fn with_config_dir<P: Into<PathBuf>>(config_dir: P) -> Self {
        let config_dir = config_dir.into();
        let (user_config, load_warning) = match UserConfig::load(&config_dir.join(CONFIG_FILE_NAME)) {
            Ok(config) => (config, None),
            Err(err) => (UserConfig::default(), Some(err.user_message())),
        };

        Self {
            config_dir,
            user_config,
            load_warning,
        }
    }

    /// 通讯录文件：配置文件指定的路径，否则 ~/.addressbook/addressbook.json
    pub fn book_file(&self) -> PathBuf {
        self.user_config
            .get_book_file()
            .unwrap_or_else(|| self.config_dir.join(BOOK_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AddressBookError, ErrorCategory};

    #[test]
    fn defaults_when_config_missing() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::with_config_dir(dir.path());
        assert_eq!(paths.user_config, UserConfig::default());
        assert!(paths.load_warning.is_none());
        assert_eq!(paths.book_file(), dir.path().join("addressbook.json"));
    }

    #[test]
    fn config_file_overrides_book_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.json"),
            r#"{"book_file": "/data/contacts.json", "log_level": "debug"}"#,
        )
        .unwrap();

        let paths = ConfigPaths::with_config_dir(dir.path());
        assert_eq!(paths.book_file(), PathBuf::from("/data/contacts.json"));
        assert_eq!(paths.user_config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn malformed_config_falls_back_to_defaults_and_keeps_reason() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), "not json").unwrap();

        let paths = ConfigPaths::with_config_dir(dir.path());
        assert_eq!(paths.user_config, UserConfig::default());
        let warning = paths.load_warning.expect("load failure should be recorded");
        assert!(warning.contains("invalid config"), "unexpected warning: {warning}");
    }

    #[test]
    fn load_reports_malformed_config_as_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{").unwrap();

        let err = UserConfig::load(&path).expect_err("malformed config should error");
        assert_eq!(err.category(), ErrorCategory::Config);
        assert!(matches!(err, AddressBookError::Config { .. }));
    }

    #[test]
    fn expands_home_prefix() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/book.json"), home.join("book.json"));
        }
        assert_eq!(expand_home("relative.json"), PathBuf::from("relative.json"));
    }
}
