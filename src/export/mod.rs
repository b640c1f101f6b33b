// ==========================================
// 成绩计算器 - 导出层
// ==========================================
// 职责: 作业记录序列化为 CSV 文件
// ==========================================

pub mod csv_exporter;
pub mod error;

// 重导出核心类型
pub use csv_exporter::{export_to_csv, write_csv, CSV_HEADER};
pub use error::{ExportError, ExportResult};
