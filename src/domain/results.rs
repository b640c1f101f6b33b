// ==========================================
// 成绩计算器 - 计算结果
// ==========================================
// 职责: 单次运行的汇总结果 (只读, 不持久化)
// 输出: 控制台摘要
// ==========================================

use crate::domain::types::Status;
use serde::{Deserialize, Serialize};

/// 重提交列表为空时的显示文本
pub const NO_RESUBMISSION: &str = "None";

// ==========================================
// GradeResults - 汇总结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeResults {
    // ===== 形成性 (FA) =====
    pub total_fa: f64,  // 加权得分合计
    pub fa_weight: f64, // 权重合计

    // ===== 总结性 (SA) =====
    pub total_sa: f64,
    pub sa_weight: f64,

    // ===== 综合 =====
    pub total_grade: f64, // total_fa + total_sa (不按总权重归一)
    pub gpa: f64,         // 5.0 制

    // ===== 判定 =====
    pub fa_pass: bool,
    pub sa_pass: bool,
    pub status: Status,

    /// 成绩 < 50 的作业名称, 按录入顺序
    pub resubmission: Vec<String>,
}

impl GradeResults {
    /// 重提交列表的显示文本: 逗号连接, 为空时为 "None"
    pub fn resubmission_display(&self) -> String {
        if self.resubmission.is_empty() {
            NO_RESUBMISSION.to_string()
        } else {
            self.resubmission.join(", ")
        }
    }

    pub fn is_pass(&self) -> bool {
        self.status == Status::Pass
    }
}
