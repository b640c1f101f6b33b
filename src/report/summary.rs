// ==========================================
// 成绩计算器 - 结果摘要
// ==========================================
// 职责: 将汇总结果格式化为固定的多行文本
// 红线: 仅做格式化, 不含判定逻辑
// ==========================================

use crate::domain::results::GradeResults;
use std::fmt::Write;

/// 摘要标题
pub const SUMMARY_TITLE: &str = "---RESULTS---";

/// 分隔线
pub const SUMMARY_DIVIDER: &str = "----------------";

/// 格式化汇总结果
///
/// 加权合计保留 2 位小数, GPA 保留 4 位小数, 权重合计按原始浮点值输出
/// (无作业的类别输出 "0")
pub fn format_summary(results: &GradeResults) -> String {
    let mut out = String::new();
    // 写入 String 不会失败
    let _ = writeln!(out, "{}", SUMMARY_TITLE);
    let _ = writeln!(
        out,
        "Total Formative: {:.2} / {}",
        results.total_fa,
        format_weight(results.fa_weight)
    );
    let _ = writeln!(
        out,
        "Total Summative: {:.2} / {}",
        results.total_sa,
        format_weight(results.sa_weight)
    );
    let _ = writeln!(out, "{}", SUMMARY_DIVIDER);
    let _ = writeln!(out, "Total Grade: {:.2} / 100", results.total_grade);
    let _ = writeln!(out, "GPA: {:.4}", results.gpa);
    let _ = writeln!(out, "Status: {}", results.status);
    let _ = writeln!(out, "Resubmission: {}", results.resubmission_display());
    out
}

/// 类别权重合计: 无作业 (合计为 0) 时输出 "0", 否则按原始浮点值输出
///
/// 已录入的权重均 > 0, 合计为 0 当且仅当该类别没有作业
pub fn format_weight(weight: f64) -> String {
    if weight == 0.0 {
        "0".to_string()
    } else {
        format_raw(weight)
    }
}

/// 原始浮点值: 最短往返表示, 整数值保留 ".0"
pub fn format_raw(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assignment::Assignment;
    use crate::domain::types::{Category, Status};
    use crate::engine::compute_results;

    #[test]
    fn test_format_summary_layout() {
        let results = GradeResults {
            total_fa: 20.0,
            fa_weight: 30.0,
            total_sa: 63.0,
            sa_weight: 70.0,
            total_grade: 83.0,
            gpa: 4.15,
            fa_pass: true,
            sa_pass: true,
            status: Status::Pass,
            resubmission: vec!["Quiz".to_string()],
        };

        let expected = "---RESULTS---\n\
                        Total Formative: 20.00 / 30.0\n\
                        Total Summative: 63.00 / 70.0\n\
                        ----------------\n\
                        Total Grade: 83.00 / 100\n\
                        GPA: 4.1500\n\
                        Status: PASS\n\
                        Resubmission: Quiz\n";
        assert_eq!(format_summary(&results), expected);
    }

    #[test]
    fn test_format_summary_empty() {
        let results = GradeResults {
            total_fa: 0.0,
            fa_weight: 0.0,
            total_sa: 0.0,
            sa_weight: 0.0,
            total_grade: 0.0,
            gpa: 0.0,
            fa_pass: false,
            sa_pass: false,
            status: Status::Fail,
            resubmission: Vec::new(),
        };
        let summary = format_summary(&results);
        assert!(summary.contains("Total Formative: 0.00 / 0\n"));
        assert!(summary.contains("Total Summative: 0.00 / 0\n"));
        assert!(summary.contains("GPA: 0.0000\n"));
        assert!(summary.contains("Status: FAIL\n"));
        assert!(summary.ends_with("Resubmission: None\n"));
    }

    #[test]
    fn test_format_summary_category_without_records() {
        let records = vec![Assignment::new("Exam", Category::Summative, 100.0, 100.0)];
        let summary = format_summary(&compute_results(&records));
        assert!(summary.contains("Total Formative: 0.00 / 0\n"));
        assert!(summary.contains("Total Summative: 100.00 / 100.0\n"));
        assert!(summary.contains("Status: FAIL\n"));
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(0.0), "0");
        assert_eq!(format_weight(30.0), "30.0");
        assert_eq!(format_weight(0.5), "0.5");
    }

    #[test]
    fn test_format_raw() {
        assert_eq!(format_raw(30.0), "30.0");
        assert_eq!(format_raw(12.5), "12.5");
        assert_eq!(format_raw(0.1 + 0.2), "0.30000000000000004");
    }
}
