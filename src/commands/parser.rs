//! CLI 命令行参数解析
//!
//! 使用 clap 定义命令行接口并进行参数解析

use clap::{Parser, Subcommand};
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::PathBuf;

use super::{Command, DeleteByNameCommand, ListCommand};

/// addressbook - 命令驱动的联系人管理工具
#[derive(Parser, Debug, Clone)]
#[command(
    name = "addressbook",
    about = "Command-driven contact manager",
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// 通讯录文件路径（默认 ~/.addressbook/addressbook.json）
    #[arg(long, global = true, value_name = "PATH")]
    pub book: Option<PathBuf>,

    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(long = "log-level", global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// 写入日志文件
    #[arg(long = "log-file", global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// 删除姓名包含任一关键词的所有联系人（区分大小写）
    #[command(
        name = "deletebyname",
        long_about = DeleteByNameCommand::MESSAGE_USAGE
    )]
    DeleteByName {
        /// 关键词（一个或多个，以空格分隔）
        #[arg(value_name = "NAME", required = true, num_args = 1..)]
        keywords: Vec<String>,
    },

    /// 列出所有联系人
    #[command(long_about = ListCommand::MESSAGE_USAGE)]
    List,
}

impl Cli {
    /// 解析命令行参数（失败时由 clap 处理错误输出和退出）
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// 尝试解析命令行参数（用于测试或自定义 argv）
    pub fn try_parse_args_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }
}

/// 将关键词列表去重为集合
pub fn keyword_set(keywords: &[String]) -> HashSet<String> {
    keywords.iter().cloned().collect()
}
