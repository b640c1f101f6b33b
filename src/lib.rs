// ==========================================
// 成绩计算器 - 核心库
// ==========================================
// 功能: 录入形成性(FA)/总结性(SA)作业, 计算加权 GPA,
//       判定通过与否, 导出 grades.csv
// 运行模型: 单线程, 顺序执行
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 评分政策与运行参数
pub mod config;

// 引擎层 - 评分规则
pub mod engine;

// 输入层 - 交互式录入
pub mod input;

// 报告层 - 结果摘要
pub mod report;

// 导出层 - CSV
pub mod export;

// 应用层 - 会话编排
pub mod app;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use app::{GradeSession, SessionOutcome};
pub use config::AppConfig;
pub use domain::{Assignment, Category, GradeResults, Status};
pub use engine::{compute_results, GradeCalculator};
pub use export::{export_to_csv, ExportError, ExportResult};
pub use input::{AssignmentCollector, InputError, InputResult};
pub use report::format_summary;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Grade Generator Calculator";
