// ==========================================
// 成绩计算器 - 应用层
// ==========================================
// 职责: 串联输入、引擎、报告、导出
// ==========================================

pub mod session;

pub use session::{GradeSession, SessionOutcome, WELCOME_BANNER};
