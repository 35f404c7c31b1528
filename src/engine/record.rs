// ==========================================
// 排班回放诊断系统 - 记录处理器
// ==========================================
// 职责: 把一条记录的正文行解析为待应用的指派序列
// 说明: 两种记录类型以带标签的变体分派,共享统一的
//       ingest_line / forward_move / inverse_move 契约
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::roster::Roster;
use crate::domain::types::RecordKind;
use crate::engine::error::{ReplayError, ReplayResult};
use crate::engine::index::RosterIndex;

// ==========================================
// 指派对
// ==========================================

/// 一次指派: 把某班次的受派员工设置为指定值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub shift_id: i64,            // 目标班次
    pub employee_id: Option<i64>, // 新受派员工 (None = 取消指派)
}

// ==========================================
// 已解析记录
// ==========================================

/// 移动记录: 正向移动 + 对应的撤销移动
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub forward: Vec<Assignment>, // 正向移动 (按受影响班次顺序)
    pub inverse: Vec<Assignment>, // 撤销移动 (恢复正向应用前的受派员工)
}

impl MoveRecord {
    /// 判断是否为空移动 (受影响班次列表为空)
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// 完整方案记录: 按规范班次顺序的新基线指派
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionRecord {
    pub baseline: Vec<Assignment>, // 新基线 (按规范班次顺序)
}

/// 一条已闭合记录的解析结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParsedRecord {
    Move(MoveRecord),
    Solution(SolutionRecord),
}

impl ParsedRecord {
    /// 记录类型
    pub fn kind(&self) -> RecordKind {
        match self {
            ParsedRecord::Move(_) => RecordKind::Move,
            ParsedRecord::Solution(_) => RecordKind::Solution,
        }
    }
}

// ==========================================
// 解析辅助
// ==========================================

/// 解析一个整数标识符
fn parse_id(line: &str, line_no: usize) -> ReplayResult<i64> {
    line.parse::<i64>()
        .map_err(|_| ReplayError::InvalidIdentifier {
            line_no,
            value: line.to_string(),
        })
}

/// 解析员工标识符或字面量 null,并立即经索引校验存在性
fn parse_employee_token(
    line: &str,
    line_no: usize,
    index: &RosterIndex,
) -> ReplayResult<Option<i64>> {
    if line == "null" {
        return Ok(None);
    }
    let employee_id = parse_id(line, line_no)?;
    index.employee_pos(employee_id)?;
    Ok(Some(employee_id))
}

// ==========================================
// 移动记录处理器
// ==========================================

/// 移动记录处理器
///
/// 首行是目标员工ID (或 null 表示取消指派),其后每行是一个班次ID。
/// 撤销对在班次行被读入的瞬间捕获该班次当时的受派员工,
/// 即正向移动应用之前的值
pub struct MoveHandler<'a> {
    roster: &'a Roster,
    index: &'a RosterIndex,
    target_employee_id: Option<i64>,
    first_line: bool,
    affected_shift_ids: Vec<i64>,
    inverse: Vec<Assignment>,
}

impl<'a> MoveHandler<'a> {
    pub fn new(roster: &'a Roster, index: &'a RosterIndex) -> Self {
        Self {
            roster,
            index,
            target_employee_id: None,
            first_line: true,
            affected_shift_ids: Vec::new(),
            inverse: Vec::new(),
        }
    }

    pub fn ingest_line(&mut self, line: &str, line_no: usize) -> ReplayResult<()> {
        if self.first_line {
            self.target_employee_id = parse_employee_token(line, line_no, self.index)?;
            self.first_line = false;
            return Ok(());
        }

        let shift_id = parse_id(line, line_no)?;
        let shift = self.index.resolve_shift(self.roster, shift_id)?;
        self.inverse.push(Assignment {
            shift_id,
            employee_id: shift.employee_id,
        });
        self.affected_shift_ids.push(shift_id);
        Ok(())
    }

    /// 正向移动: 每个受影响班次配对目标员工,按读入顺序
    pub fn forward_move(&self) -> Vec<Assignment> {
        self.affected_shift_ids
            .iter()
            .map(|shift_id| Assignment {
                shift_id: *shift_id,
                employee_id: self.target_employee_id,
            })
            .collect()
    }

    /// 撤销移动: 每个受影响班次配对其正向应用前的受派员工
    pub fn inverse_move(&self) -> Vec<Assignment> {
        self.inverse.clone()
    }
}

// ==========================================
// 完整方案记录处理器
// ==========================================

/// 完整方案记录处理器
///
/// 第 n 行正文是数据集规范顺序中第 n 个班次的受派员工,
/// 位置由从零递增的计数器跟踪。完整方案是新基线,不存在撤销移动
pub struct SolutionHandler<'a> {
    roster: &'a Roster,
    index: &'a RosterIndex,
    position: usize,
    baseline: Vec<Assignment>,
}

impl<'a> SolutionHandler<'a> {
    pub fn new(roster: &'a Roster, index: &'a RosterIndex) -> Self {
        Self {
            roster,
            index,
            position: 0,
            baseline: Vec::with_capacity(roster.shift_count()),
        }
    }

    pub fn ingest_line(&mut self, line: &str, line_no: usize) -> ReplayResult<()> {
        let employee_id = parse_employee_token(line, line_no, self.index)?;
        let shift = self.roster.shifts.get(self.position).ok_or(
            ReplayError::SolutionOutOfRange {
                position: self.position,
                shift_count: self.roster.shift_count(),
            },
        )?;
        self.baseline.push(Assignment {
            shift_id: shift.id,
            employee_id,
        });
        self.position += 1;
        Ok(())
    }

    /// 已读入的新基线指派 (完整性由驱动按策略判定)
    pub fn forward_move(&self) -> Vec<Assignment> {
        self.baseline.clone()
    }

    /// 已读入的正文行数
    pub fn ingested_count(&self) -> usize {
        self.position
    }
}

// ==========================================
// 统一分派
// ==========================================

/// 记录处理器 (带标签的变体分派)
pub enum RecordHandler<'a> {
    Move(MoveHandler<'a>),
    Solution(SolutionHandler<'a>),
}

impl<'a> RecordHandler<'a> {
    /// 按记录类型实例化处理器
    pub fn new(kind: RecordKind, roster: &'a Roster, index: &'a RosterIndex) -> Self {
        match kind {
            RecordKind::Move => RecordHandler::Move(MoveHandler::new(roster, index)),
            RecordKind::Solution => RecordHandler::Solution(SolutionHandler::new(roster, index)),
        }
    }

    /// 按序读入一行记录正文
    pub fn ingest_line(&mut self, line: &str, line_no: usize) -> ReplayResult<()> {
        match self {
            RecordHandler::Move(h) => h.ingest_line(line, line_no),
            RecordHandler::Solution(h) => h.ingest_line(line, line_no),
        }
    }

    /// 记录闭合后产出解析结果
    pub fn finish(self) -> ReplayResult<ParsedRecord> {
        match self {
            RecordHandler::Move(h) => Ok(ParsedRecord::Move(MoveRecord {
                forward: h.forward_move(),
                inverse: h.inverse_move(),
            })),
            RecordHandler::Solution(h) => Ok(ParsedRecord::Solution(SolutionRecord {
                baseline: h.forward_move(),
            })),
        }
    }
}
