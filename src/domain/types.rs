// ==========================================
// 成绩计算器 - 领域类型定义
// ==========================================
// 红线: 作业类别为封闭枚举, 非法类别不得进入计算引擎
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ==========================================
// 作业类别 (Category)
// ==========================================
// 输入: 大小写不敏感的 "FA"/"SA"
// 序列化格式: "FA"/"SA" (与导出文件一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "FA")]
    Formative, // 形成性作业
    #[serde(rename = "SA")]
    Summative, // 总结性作业
}

impl Category {
    /// 类别标签 ("FA" / "SA")
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Formative => "FA",
            Category::Summative => "SA",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// 类别解析失败
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("未知作业类别: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FA" => Ok(Category::Formative),
            "SA" => Ok(Category::Summative),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

// ==========================================
// 通过状态 (Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Pass,
    Fail,
}

impl Status {
    /// 由两类作业的通过条件得出总判定
    pub fn from_conditions(fa_pass: bool, sa_pass: bool) -> Self {
        if fa_pass && sa_pass {
            Status::Pass
        } else {
            Status::Fail
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pass => write!(f, "PASS"),
            Status::Fail => write!(f, "FAIL"),
        }
    }
}
