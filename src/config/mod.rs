// ==========================================
// 成绩计算器 - 配置层
// ==========================================
// 职责: 固定评分政策常量 + 运行参数 (导出路径/日志)
// ==========================================

pub mod app_config;
pub mod policy;

// 重导出运行配置
pub use app_config::{env_keys, AppConfig, DEFAULT_LOG_FILTER, DEFAULT_OUTPUT_PATH};
