// ==========================================
// 成绩计算器 - 作业记录领域模型
// ==========================================
// 职责: 单条作业记录 (名称/类别/成绩/权重)
// 红线: 构造后不可变; 字段约束由输入边界保证, 本类型不做校验
// ==========================================

use crate::config::policy::PERCENT_SCALE;
use crate::domain::types::Category;
use serde::{Deserialize, Serialize};

// ==========================================
// Assignment - 作业记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    name: String,       // 作业名称 (允许重名)
    category: Category, // 作业类别
    grade: f64,         // 原始成绩 [0, 100]
    weight: f64,        // 权重 (> 0)
}

impl Assignment {
    /// 创建作业记录
    ///
    /// # 参数
    /// - `name`: 作业名称 (已去除首尾空白)
    /// - `category`: 作业类别
    /// - `grade`: 成绩, 调用方保证在 [0, 100]
    /// - `weight`: 权重, 调用方保证 > 0
    pub fn new(name: impl Into<String>, category: Category, grade: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            category,
            grade,
            weight,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn grade(&self) -> f64 {
        self.grade
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// 加权得分 = (成绩 / 100) * 权重
    ///
    /// 每次调用重新计算, 不缓存
    pub fn weighted_score(&self) -> f64 {
        (self.grade / PERCENT_SCALE) * self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_score() {
        let essay = Assignment::new("Essay", Category::Formative, 80.0, 20.0);
        assert!((essay.weighted_score() - 16.0).abs() < 1e-9);

        let exam = Assignment::new("Exam", Category::Summative, 90.0, 70.0);
        assert!((exam.weighted_score() - 63.0).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_score_bounds() {
        let zero = Assignment::new("Zero", Category::Formative, 0.0, 25.0);
        assert_eq!(zero.weighted_score(), 0.0);

        let full = Assignment::new("Full", Category::Summative, 100.0, 25.0);
        assert!((full.weighted_score() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_accessors() {
        let a = Assignment::new("Lab 1", Category::Summative, 55.5, 12.5);
        assert_eq!(a.name(), "Lab 1");
        assert_eq!(a.category(), Category::Summative);
        assert_eq!(a.grade(), 55.5);
        assert_eq!(a.weight(), 12.5);
    }
}
