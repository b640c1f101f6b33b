// ==========================================
// 成绩计算器 - 输入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 校验类错误的 Display 即为展示给用户的提示语
// ==========================================

use thiserror::Error;

/// 输入模块错误类型
#[derive(Error, Debug)]
pub enum InputError {
    // ===== 校验错误 (就地重新提示) =====
    #[error("Assignment name cannot be empty.")]
    EmptyName,

    #[error("Invalid category. Please enter FA or SA.")]
    InvalidCategory(String),

    #[error("Please enter a valid number.")]
    NotANumber(String),

    #[error("Grade must be between 0 and 100.")]
    GradeOutOfRange(f64),

    #[error("Weight must be positive.")]
    WeightNotPositive(f64),

    // ===== 致命错误 (终止本次运行) =====
    #[error("输入已结束 (等待: {prompt})")]
    EndOfInput { prompt: String },

    #[error("终端读写失败: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// 是否可通过重新提示恢复
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, InputError::EndOfInput { .. } | InputError::Io(_))
    }
}

/// Result 类型别名
pub type InputResult<T> = Result<T, InputError>;
