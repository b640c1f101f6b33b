// ==========================================
// 成绩计算器 - 领域模型层
// ==========================================
// 职责: 定义作业记录、类别、汇总结果
// 红线: 不含输入/导出逻辑,不含计算引擎逻辑
// ==========================================

pub mod assignment;
pub mod results;
pub mod types;

// 重导出核心类型
pub use assignment::Assignment;
pub use results::{GradeResults, NO_RESUBMISSION};
pub use types::{Category, Status, UnknownCategory};
