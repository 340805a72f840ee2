//! 日志系统
//!
//! 提供统一的日志记录功能

use anyhow::Result;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{DEFAULT_LOG_FILTER, LOG_ENV};

/// 构建日志过滤器
///
/// 优先级：参数指定的级别 > `ADDRESSBOOK_LOG` 环境变量 > 默认值
pub fn build_filter(log_level: Option<&str>) -> Result<EnvFilter> {
    let filter = match log_level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    Ok(filter)
}

/// 日志级别解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLevel {
    /// 传给 `init_logger` 的级别，None 表示读取环境变量或使用默认值
    pub level: Option<String>,
    /// 配置文件中的级别无效时的提示
    pub warning: Option<String>,
}

/// 确定日志级别
///
/// 优先级：`--log-level` > `ADDRESSBOOK_LOG` 环境变量 > config.json > 默认值。
/// 命令行指定的级别原样返回，无效时由 `init_logger` 报错；
/// 配置文件中的无效级别回退到默认值并附带提示。
pub fn resolve_log_level(
    cli_level: Option<&str>,
    env_set: bool,
    config_level: Option<&str>,
) -> ResolvedLevel {
    if let Some(level) = cli_level {
        return ResolvedLevel {
            level: Some(level.to_string()),
            warning: None,
        };
    }
    if env_set {
        return ResolvedLevel {
            level: None,
            warning: None,
        };
    }
    match config_level {
        Some(level) if EnvFilter::try_new(level).is_err() => ResolvedLevel {
            level: Some(DEFAULT_LOG_FILTER.to_string()),
            warning: Some(format!(
                "invalid log_level '{}' in config, using default '{}'",
                level, DEFAULT_LOG_FILTER
            )),
        },
        other => ResolvedLevel {
            level: other.map(str::to_string),
            warning: None,
        },
    }
}

/// 初始化日志系统
///
/// # Arguments
/// * `log_level` - 日志级别 (trace, debug, info, warn, error)，如果为 None 则使用环境变量 ADDRESSBOOK_LOG
/// * `log_file` - 日志文件路径，如果为 None 则只输出到标准错误
///
/// # Examples
/// ```no_run
/// use addressbook::utils::logger::init_logger;
///
/// // 使用默认配置（从环境变量读取）
/// init_logger(None, None).unwrap();
/// ```
pub fn init_logger(log_level: Option<&str>, log_file: Option<PathBuf>) -> Result<()> {
    let env_filter = build_filter(log_level)?;

    // 命令输出走标准输出，日志走标准错误
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_ansi(true)
        .compact();

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);

    if let Some(log_path) = log_file {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        // 文件中不使用 ANSI 颜色
        let file_layer = fmt::layer()
            .with_writer(std::sync::Arc::new(file))
            .with_target(true)
            .with_ansi(false)
            .with_level(true);

        registry.with(file_layer).try_init()?;
    } else {
        registry.try_init()?;
    }

    tracing::debug!("Logger initialized");
    Ok(())
}
