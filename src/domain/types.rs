// ==========================================
// 排班回放诊断系统 - 领域类型定义
// ==========================================
// 职责: 回放日志记录类型与员工可用性状态
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 记录类型 (Record Kind)
// ==========================================
// 回放日志中以成对标签界定的记录块类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordKind {
    Move,     // 局部移动(可撤销)
    Solution, // 完整方案(新基线)
}

impl RecordKind {
    /// 全部记录类型
    pub const ALL: [RecordKind; 2] = [RecordKind::Move, RecordKind::Solution];

    /// 转换为字符串标识
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Move => "MOVE",
            RecordKind::Solution => "SOLUTION",
        }
    }

    /// 记录起始标签
    pub fn start_tag(&self) -> &'static str {
        match self {
            RecordKind::Move => "<MOVE>",
            RecordKind::Solution => "<SOLUTION>",
        }
    }

    /// 记录结束标签
    pub fn end_tag(&self) -> &'static str {
        match self {
            RecordKind::Move => "</MOVE>",
            RecordKind::Solution => "</SOLUTION>",
        }
    }

    /// 按起始标签识别记录类型
    pub fn from_start_tag(line: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.start_tag() == line)
    }

    /// 按结束标签识别记录类型
    pub fn from_end_tag(line: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.end_tag() == line)
    }

    /// 判断是否为本类型的结束标签
    pub fn is_end(&self, line: &str) -> bool {
        line == self.end_tag()
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 可用性状态 (Availability State)
// ==========================================
// 员工对某时间段的可用程度
// 顺序: Unavailable < Undesired < Desired
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityState {
    Unavailable, // 不可排班
    Undesired,   // 不愿排班
    Desired,     // 愿意排班
}

impl AvailabilityState {
    /// 从字符串解析可用性状态
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "UNAVAILABLE" => Some(AvailabilityState::Unavailable),
            "UNDESIRED" => Some(AvailabilityState::Undesired),
            "DESIRED" => Some(AvailabilityState::Desired),
            _ => None,
        }
    }
}

impl fmt::Display for AvailabilityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvailabilityState::Unavailable => write!(f, "UNAVAILABLE"),
            AvailabilityState::Undesired => write!(f, "UNDESIRED"),
            AvailabilityState::Desired => write!(f, "DESIRED"),
        }
    }
}
