// ==========================================
// 成绩计算器 - 会话编排
// ==========================================
// 职责: 录入 -> 汇总 -> 摘要输出 -> CSV 导出, 严格顺序执行
// 红线: 导出失败不致命, 仅提示并继续结束
// ==========================================

use crate::config::AppConfig;
use crate::domain::assignment::Assignment;
use crate::domain::results::GradeResults;
use crate::engine::GradeCalculator;
use crate::export::export_to_csv;
use crate::input::{AssignmentCollector, InputResult};
use crate::report::format_summary;
use std::io::{BufRead, Write};
use tracing::{error, info};

/// 欢迎语
pub const WELCOME_BANNER: &str = "Welcome to the Grade Generator Calculator";

// ==========================================
// SessionOutcome - 会话结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub results: GradeResults,
    pub exported: bool, // CSV 是否导出成功
}

// ==========================================
// GradeSession - 单次运行会话
// ==========================================
pub struct GradeSession<R, W> {
    reader: R,
    writer: W,
    config: AppConfig,
    calculator: GradeCalculator,
    records: Vec<Assignment>, // 仅追加, 保持录入顺序
}

impl<R: BufRead, W: Write> GradeSession<R, W> {
    pub fn new(reader: R, writer: W, config: AppConfig) -> Self {
        Self {
            reader,
            writer,
            config,
            calculator: GradeCalculator::new(),
            records: Vec::new(),
        }
    }

    /// 已录入的作业记录
    pub fn records(&self) -> &[Assignment] {
        &self.records
    }

    /// 执行完整流程
    ///
    /// # 返回
    /// - Ok(SessionOutcome): 汇总结果 + 导出是否成功
    /// - Err(InputError): 输入提前结束或终端读写失败 (不做汇总与导出)
    pub fn run(&mut self) -> InputResult<SessionOutcome> {
        writeln!(self.writer, "{}\n", WELCOME_BANNER)?;

        // 1. 录入
        let added = AssignmentCollector::new(&mut self.reader, &mut self.writer)
            .collect_into(&mut self.records)?;
        info!(added, "作业录入结束");

        // 2. 汇总
        let results = self.calculator.compute_results(&self.records);

        // 3. 摘要
        write!(self.writer, "\n{}", format_summary(&results))?;

        // 4. 导出
        let exported = self.export()?;

        Ok(SessionOutcome { results, exported })
    }

    /// 导出 CSV, 失败时向用户提示并返回 false
    fn export(&mut self) -> InputResult<bool> {
        let name = self.config.output_display_name();
        writeln!(self.writer, "\nExporting results to {}...", name)?;

        match export_to_csv(&self.config.output_path, &self.records) {
            Ok(()) => {
                writeln!(self.writer, "\nData saved to {}", name)?;
                Ok(true)
            }
            Err(e) => {
                error!(
                    path = %self.config.output_path.display(),
                    error = %e,
                    "CSV 导出失败"
                );
                writeln!(self.writer, "Error saving file: {}", e)?;
                Ok(false)
            }
        }
    }
}
