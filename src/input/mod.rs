// ==========================================
// 成绩计算器 - 输入层
// ==========================================
// 职责: 交互式录入与字段校验
// 红线: 只有通过校验的记录才能进入引擎
// ==========================================

pub mod collector;
pub mod error;
pub mod validator;

// 重导出核心类型
pub use collector::AssignmentCollector;
pub use error::{InputError, InputResult};
pub use validator::{
    validate_category, validate_grade, validate_name, validate_weight, wants_another,
};
