// ==========================================
// 成绩计算器 - 引擎层
// ==========================================
// 职责: 实现评分规则, 不做输入输出
// 红线: 引擎只消费已校验的记录
// ==========================================

pub mod grade_calculator;

// 重导出核心引擎
pub use grade_calculator::{compute_results, GradeCalculator};
