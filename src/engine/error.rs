// ==========================================
// 排班回放诊断系统 - 回放引擎错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 所有错误对当前回放是致命的,对进程是可恢复的
// ==========================================

use thiserror::Error;

/// 回放引擎错误类型
#[derive(Error, Debug)]
pub enum ReplayError {
    // ===== 格式错误 =====
    #[error("无法识别的记录起始标签 (行 {line_no}): {line}")]
    UnrecognizedStartTag { line_no: usize, line: String },

    #[error("记录结束标签不匹配 (行 {line_no}): 期望 {expected}, 实际 {actual}")]
    MismatchedEndTag {
        line_no: usize,
        expected: String,
        actual: String,
    },

    #[error("标识符格式错误 (行 {line_no}): {value}")]
    InvalidIdentifier { line_no: usize, value: String },

    // ===== 解析错误 (日志与数据集不匹配) =====
    #[error("班次标识符不存在: {0}")]
    UnknownShiftId(i64),

    #[error("员工标识符不存在: {0}")]
    UnknownEmployeeId(i64),

    // ===== 越界错误 =====
    #[error("完整方案记录超出班次总数: 位置 {position}, 班次总数 {shift_count}")]
    SolutionOutOfRange { position: usize, shift_count: usize },

    #[error("完整方案记录不完整: 期望 {expected} 行, 实际 {actual} 行")]
    IncompleteSolution { expected: usize, actual: usize },

    // ===== 基础设施错误 =====
    #[error("日志读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("工作集操作失败: {0}")]
    WorkingSet(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ReplayResult<T> = Result<T, ReplayError>;
