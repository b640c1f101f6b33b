// ==========================================
// 成绩计算器 - CSV 导出
// ==========================================
// 职责: 将作业记录 (原始成绩/权重) 写入表格文件
// 输出: Assignment,Category,Grade,Weight + 每条记录一行
// 红线: 每次运行覆盖旧文件; 不导出 GPA 与判定
// ==========================================

use crate::domain::assignment::Assignment;
use crate::domain::types::Category;
use crate::export::error::ExportResult;
use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// CSV 表头
pub const CSV_HEADER: [&str; 4] = ["Assignment", "Category", "Grade", "Weight"];

// 导出行
#[derive(Serialize)]
struct CsvRow<'a> {
    name: &'a str,
    category: Category,
    grade: f64,
    weight: f64,
}

impl<'a> From<&'a Assignment> for CsvRow<'a> {
    fn from(a: &'a Assignment) -> Self {
        Self {
            name: a.name(),
            category: a.category(),
            grade: a.grade(),
            weight: a.weight(),
        }
    }
}

/// 导出作业记录到 CSV 文件 (覆盖已存在的文件)
///
/// # 参数
/// - `path`: 目标文件路径
/// - `records`: 按录入顺序的作业记录
///
/// # 返回
/// - Ok(()): 写入并刷新成功
/// - Err(ExportError): 打开或写入失败
pub fn export_to_csv<P: AsRef<Path>>(path: P, records: &[Assignment]) -> ExportResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(file, records)?;

    info!(path = %path.display(), rows = records.len(), "CSV 导出完成");
    Ok(())
}

/// 将作业记录写入任意输出端
///
/// 表头单独写出, 保证空记录时文件仍含表头; 行尾为 CRLF
pub fn write_csv<W: Write>(writer: W, records: &[Assignment]) -> ExportResult<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.serialize(CsvRow::from(record))?;
    }
    wtr.flush()?;
    Ok(())
}
