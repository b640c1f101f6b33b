// ==========================================
// 成绩计算器 - 输入校验器
// ==========================================
// 职责: 单字段校验 (名称/类别/成绩/权重/是否继续)
// 红线: 非数字与越界使用不同的错误
// ==========================================

use crate::config::policy::{GRADE_MAX, GRADE_MIN};
use crate::domain::types::Category;
use crate::input::error::{InputError, InputResult};

/// 校验作业名称: 去除首尾空白后不得为空
pub fn validate_name(raw: &str) -> InputResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(InputError::EmptyName);
    }
    Ok(name.to_string())
}

/// 校验作业类别: 大小写不敏感的 FA / SA
pub fn validate_category(raw: &str) -> InputResult<Category> {
    raw.parse::<Category>()
        .map_err(|_| InputError::InvalidCategory(raw.trim().to_string()))
}

/// 校验成绩: 实数, 且在 [0, 100] 闭区间内
pub fn validate_grade(raw: &str) -> InputResult<f64> {
    let grade = parse_number(raw)?;
    // NaN 不满足区间比较, 一并归为越界
    if (GRADE_MIN..=GRADE_MAX).contains(&grade) {
        Ok(grade)
    } else {
        Err(InputError::GradeOutOfRange(grade))
    }
}

/// 校验权重: 实数, 且严格大于 0 (无上限)
pub fn validate_weight(raw: &str) -> InputResult<f64> {
    let weight = parse_number(raw)?;
    if weight > 0.0 {
        Ok(weight)
    } else {
        Err(InputError::WeightNotPositive(weight))
    }
}

/// 是否继续录入: 仅 "y" (大小写不敏感) 视为肯定
pub fn wants_another(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("y")
}

fn parse_number(raw: &str) -> InputResult<f64> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))
}
