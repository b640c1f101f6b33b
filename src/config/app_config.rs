// ==========================================
// 成绩计算器 - 运行配置
// ==========================================
// 职责: 导出路径、日志级别等运行参数
// 来源: 环境变量 (缺省值兜底)
// ==========================================

use std::path::{Path, PathBuf};

/// 默认导出文件 (相对当前工作目录)
pub const DEFAULT_OUTPUT_PATH: &str = "grades.csv";

/// 默认日志过滤器
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub mod env_keys {
    // 导出文件路径
    pub const OUTPUT_PATH: &str = "GRADE_GENERATOR_OUTPUT";

    // 日志过滤器 (tracing-subscriber EnvFilter 语法)
    pub const LOG_FILTER: &str = "RUST_LOG";
}

// ==========================================
// AppConfig - 运行配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub output_path: PathBuf,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// 从进程环境变量加载配置
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载配置
    ///
    /// # 参数
    /// - `lookup`: 键 -> 值 (不存在返回 None)
    ///
    /// # 说明
    /// 空白值视为未配置, 回落到默认值
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();
        Self {
            output_path: non_blank(env_keys::OUTPUT_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            log_filter: non_blank(env_keys::LOG_FILTER).unwrap_or(defaults.log_filter),
        }
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// 导出文件名 (用于提示信息)
    pub fn output_display_name(&self) -> String {
        display_name(&self.output_path)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
