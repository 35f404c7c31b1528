// ==========================================
// 排班回放诊断系统 - 标识符索引
// ==========================================
// 职责: 从数据集快照构建 ID → 竞技场下标 的查找表
// 说明: 标识符与快照无关,回放全程只构建一次
// ==========================================

use std::collections::HashMap;

use crate::domain::roster::{Employee, Roster, Shift};
use crate::engine::error::{ReplayError, ReplayResult};

// ==========================================
// RosterIndex - 标识符索引
// ==========================================
// 两张映射: 班次ID → 下标, 员工ID → 下标
// 快照内标识符唯一由上游生成器保证,此处不做防御
#[derive(Debug, Clone, Default)]
pub struct RosterIndex {
    shift_pos: HashMap<i64, usize>,
    employee_pos: HashMap<i64, usize>,
}

impl RosterIndex {
    /// 从数据集快照构建索引 (线性时间)
    pub fn build(roster: &Roster) -> Self {
        let mut shift_pos = HashMap::with_capacity(roster.shifts.len());
        for (pos, shift) in roster.shifts.iter().enumerate() {
            shift_pos.insert(shift.id, pos);
        }

        let mut employee_pos = HashMap::with_capacity(roster.employees.len());
        for (pos, employee) in roster.employees.iter().enumerate() {
            employee_pos.insert(employee.id, pos);
        }

        Self {
            shift_pos,
            employee_pos,
        }
    }

    /// 班次ID → 竞技场下标
    pub fn shift_pos(&self, shift_id: i64) -> ReplayResult<usize> {
        self.shift_pos
            .get(&shift_id)
            .copied()
            .ok_or(ReplayError::UnknownShiftId(shift_id))
    }

    /// 员工ID → 竞技场下标
    pub fn employee_pos(&self, employee_id: i64) -> ReplayResult<usize> {
        self.employee_pos
            .get(&employee_id)
            .copied()
            .ok_or(ReplayError::UnknownEmployeeId(employee_id))
    }

    /// 解析班次引用
    pub fn resolve_shift<'a>(&self, roster: &'a Roster, shift_id: i64) -> ReplayResult<&'a Shift> {
        Ok(&roster.shifts[self.shift_pos(shift_id)?])
    }

    /// 解析员工引用
    pub fn resolve_employee<'a>(
        &self,
        roster: &'a Roster,
        employee_id: i64,
    ) -> ReplayResult<&'a Employee> {
        Ok(&roster.employees[self.employee_pos(employee_id)?])
    }

    /// 判断是否包含指定班次
    pub fn contains_shift(&self, shift_id: i64) -> bool {
        self.shift_pos.contains_key(&shift_id)
    }

    /// 判断是否包含指定员工
    pub fn contains_employee(&self, employee_id: i64) -> bool {
        self.employee_pos.contains_key(&employee_id)
    }
}
