// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 日志写入 stderr, 不与 stdout 上的交互提示混杂
// ==========================================

use crate::config::AppConfig;
use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统
///
/// # 参数
/// - config: 运行配置, 取 `log_filter`（默认: warn）
///   例如: RUST_LOG=debug 或 RUST_LOG=grade_generator=trace
///
/// # 示例
/// ```no_run
/// use grade_generator::{config::AppConfig, logging};
/// logging::init(&AppConfig::from_env());
/// ```
pub fn init(config: &AppConfig) {
    // 过滤器语法错误时回落到默认级别
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    // 配置日志格式
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .try_init();
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
