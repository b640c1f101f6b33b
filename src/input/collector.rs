// ==========================================
// 成绩计算器 - 交互式录入
// ==========================================
// 职责: 逐字段提示、校验、重新提示, 组装作业记录
// 输入: 任意 BufRead (终端 stdin / 测试脚本)
// 输出: 提示语与错误提示写入任意 Write
// 红线: 校验失败无限重试; 输入结束视为致命错误
// ==========================================

use crate::domain::assignment::Assignment;
use crate::input::error::{InputError, InputResult};
use crate::input::validator::{
    validate_category, validate_grade, validate_name, validate_weight, wants_another,
};
use std::io::{BufRead, Write};
use tracing::debug;

// ===== 提示语 =====
pub const PROMPT_NAME: &str = "Assignment Name: ";
pub const PROMPT_CATEGORY: &str = "Category (FA/SA): ";
pub const PROMPT_GRADE: &str = "Grade (0-100): ";
pub const PROMPT_WEIGHT: &str = "Weight (positive number): ";
pub const PROMPT_CONTINUE: &str = "Add another assignment? (y/n): ";

// ==========================================
// AssignmentCollector - 作业录入器
// ==========================================
pub struct AssignmentCollector<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> AssignmentCollector<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// 循环录入作业, 直到用户不再选择继续
    ///
    /// # 参数
    /// - `records`: 追加目标; 中途失败时已录入的记录保留
    ///
    /// # 返回
    /// - Ok(n): 本次新增的记录数 (至少 1)
    /// - Err(InputError::EndOfInput / Io): 致命错误
    pub fn collect_into(&mut self, records: &mut Vec<Assignment>) -> InputResult<usize> {
        let mut added = 0;
        loop {
            let assignment = self.read_assignment()?;
            debug!(
                name = assignment.name(),
                category = %assignment.category(),
                grade = assignment.grade(),
                weight = assignment.weight(),
                "作业已录入"
            );
            records.push(assignment);
            added += 1;

            let answer = self.read_line(PROMPT_CONTINUE)?;
            if !wants_another(&answer) {
                break;
            }
        }
        Ok(added)
    }

    /// 录入全部作业并返回
    pub fn collect(&mut self) -> InputResult<Vec<Assignment>> {
        let mut records = Vec::new();
        self.collect_into(&mut records)?;
        Ok(records)
    }

    /// 录入单条作业 (四个字段依次校验)
    pub fn read_assignment(&mut self) -> InputResult<Assignment> {
        let name = self.read_valid(PROMPT_NAME, validate_name)?;
        let category = self.read_valid(PROMPT_CATEGORY, validate_category)?;
        let grade = self.read_valid(PROMPT_GRADE, validate_grade)?;
        let weight = self.read_valid(PROMPT_WEIGHT, validate_weight)?;
        Ok(Assignment::new(name, category, grade, weight))
    }

    /// 提示并校验, 失败时输出错误提示后重新提示同一字段
    fn read_valid<T, F>(&mut self, prompt: &str, validate: F) -> InputResult<T>
    where
        F: Fn(&str) -> InputResult<T>,
    {
        loop {
            let line = self.read_line(prompt)?;
            match validate(&line) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_recoverable() => {
                    debug!(prompt, input = %line, error = ?err, "输入校验未通过");
                    writeln!(self.writer, "{}", err)?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// 输出提示并读取一行 (去掉行尾换行符)
    fn read_line(&mut self, prompt: &str) -> InputResult<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Err(InputError::EndOfInput {
                prompt: prompt.trim_end().to_string(),
            });
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}
