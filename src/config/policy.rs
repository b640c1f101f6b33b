// ==========================================
// 成绩计算器 - 评分政策常量
// ==========================================
// 红线: 评分政策固定, 不提供运行时覆写
// ==========================================

/// 百分制满分
pub const PERCENT_SCALE: f64 = 100.0;

/// GPA 满分 (5.0 制)
pub const GPA_SCALE: f64 = 5.0;

/// 单类别通过比例: 加权得分合计 >= 权重合计 * 0.5
pub const PASS_RATIO: f64 = 0.5;

/// 重提交阈值: 原始成绩低于此值的作业需要重提交
pub const RESUBMISSION_THRESHOLD: f64 = 50.0;

// 成绩合法区间 (闭区间)
pub const GRADE_MIN: f64 = 0.0;
pub const GRADE_MAX: f64 = 100.0;
