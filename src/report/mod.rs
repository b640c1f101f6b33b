// ==========================================
// 成绩计算器 - 报告层
// ==========================================

pub mod summary;

pub use summary::{
    format_raw, format_summary, format_weight, SUMMARY_DIVIDER, SUMMARY_TITLE,
};
