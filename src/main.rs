// ==========================================
// 成绩计算器 - 命令行入口
// ==========================================
// 流程: 加载配置 -> 初始化日志 -> 运行交互会话
// 退出码: 导出失败仍为 0; 仅输入提前结束/终端故障为非 0
// ==========================================

use anyhow::Context;
use grade_generator::{logging, AppConfig, GradeSession};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    // 初始化日志系统
    logging::init(&config);

    tracing::info!("{} v{}", grade_generator::APP_NAME, grade_generator::VERSION);
    tracing::info!("导出文件: {}", config.output_path.display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = GradeSession::new(stdin.lock(), stdout.lock(), config);

    let outcome = session.run().context("成绩录入中止")?;

    tracing::info!(
        status = %outcome.results.status,
        passed = outcome.results.is_pass(),
        exported = outcome.exported,
        "运行结束"
    );
    Ok(())
}
