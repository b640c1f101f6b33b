// ==========================================
// 成绩计算器 - 汇总判定引擎
// ==========================================
// 职责: 分类汇总、GPA、通过判定、重提交列表
// 输入: 已校验的作业记录序列 (可为空)
// 输出: GradeResults
// 红线: 纯函数, 无副作用, 不会失败
// ==========================================

use crate::config::policy::{GPA_SCALE, PASS_RATIO, PERCENT_SCALE, RESUBMISSION_THRESHOLD};
use crate::domain::assignment::Assignment;
use crate::domain::results::GradeResults;
use crate::domain::types::{Category, Status};
use tracing::info;

// ==========================================
// CategoryTotals - 单类别累计
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct CategoryTotals {
    score: f64,  // 加权得分合计
    weight: f64, // 权重合计
}

impl CategoryTotals {
    fn add(&mut self, assignment: &Assignment) {
        self.score += assignment.weighted_score();
        self.weight += assignment.weight();
    }

    /// 该类别无作业 (权重为 0) 时不能通过
    fn passes(&self) -> bool {
        self.weight > 0.0 && self.score >= self.weight * PASS_RATIO
    }
}

// ==========================================
// GradeCalculator - 汇总判定引擎
// ==========================================
pub struct GradeCalculator {
    // 无状态引擎
}

impl GradeCalculator {
    pub fn new() -> Self {
        Self {}
    }

    /// 计算汇总结果
    ///
    /// # 参数
    /// - `records`: 按录入顺序排列的作业记录
    ///
    /// # 返回
    /// GradeResults (空输入时各项合计为 0, 判定为 FAIL)
    pub fn compute_results(&self, records: &[Assignment]) -> GradeResults {
        // 1. 按类别累计加权得分与权重
        let mut fa = CategoryTotals::default();
        let mut sa = CategoryTotals::default();
        for record in records {
            match record.category() {
                Category::Formative => fa.add(record),
                Category::Summative => sa.add(record),
            }
        }

        // 2. 综合得分与 GPA (假定权重合计为 100, 不做归一)
        let total_grade = fa.score + sa.score;
        let gpa = (total_grade / PERCENT_SCALE) * GPA_SCALE;

        // 3. 通过判定: 两类均需达到各自权重的一半
        let fa_pass = fa.passes();
        let sa_pass = sa.passes();
        let status = Status::from_conditions(fa_pass, sa_pass);

        // 4. 重提交列表 (不区分类别)
        let resubmission = resubmission_names(records);

        info!(
            records = records.len(),
            total_grade,
            gpa,
            %status,
            resubmissions = resubmission.len(),
            "成绩汇总完成"
        );

        GradeResults {
            total_fa: fa.score,
            fa_weight: fa.weight,
            total_sa: sa.score,
            sa_weight: sa.weight,
            total_grade,
            gpa,
            fa_pass,
            sa_pass,
            status,
            resubmission,
        }
    }
}

impl Default for GradeCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// 计算汇总结果 (便捷函数)
pub fn compute_results(records: &[Assignment]) -> GradeResults {
    GradeCalculator::new().compute_results(records)
}

/// 原始成绩低于阈值的作业名称, 保持录入顺序
fn resubmission_names(records: &[Assignment]) -> Vec<String> {
    records
        .iter()
        .filter(|a| a.grade() < RESUBMISSION_THRESHOLD)
        .map(|a| a.name().to_string())
        .collect()
}
