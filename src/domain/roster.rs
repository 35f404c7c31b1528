// ==========================================
// 排班回放诊断系统 - 排班数据集领域模型
// ==========================================
// 职责: 定义班次/员工/岗位/技能实体与数据集快照
// 红线: 实体间只持有整数标识符引用,不持有所有权指针
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::AvailabilityState;

// ==========================================
// Skill - 技能
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,      // 技能ID (全局唯一)
    pub name: String, // 技能名称
}

// ==========================================
// Spot - 岗位
// ==========================================
// 一个岗位在每个时间段产生一个班次
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    pub id: i64,                        // 岗位ID (全局唯一)
    pub name: String,                   // 岗位名称
    pub required_skill_id: Option<i64>, // 上岗所需技能
}

// ==========================================
// Employee - 员工
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,             // 员工ID (全局唯一)
    pub name: String,        // 员工姓名
    pub skill_ids: Vec<i64>, // 已掌握技能
}

impl Employee {
    /// 判断员工是否掌握指定技能
    pub fn has_skill(&self, skill_id: i64) -> bool {
        self.skill_ids.contains(&skill_id)
    }

    /// 判断员工是否掌握全部指定技能
    pub fn has_skills(&self, skill_ids: &[i64]) -> bool {
        skill_ids.iter().all(|id| self.has_skill(*id))
    }
}

// ==========================================
// EmployeeAvailability - 员工可用性
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeAvailability {
    pub id: i64,                       // 可用性记录ID (全局唯一)
    pub employee_id: i64,              // 关联员工
    pub start_date_time: NaiveDateTime, // 时间段开始
    pub end_date_time: NaiveDateTime,   // 时间段结束
    pub state: AvailabilityState,      // 可用程度
}

// ==========================================
// Shift - 班次
// ==========================================
// 回放期间唯一可变的字段是 employee_id (当前受派员工)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: i64,                        // 班次ID (全局唯一)
    pub spot_id: i64,                   // 关联岗位
    pub start_date_time: NaiveDateTime, // 班次开始
    pub end_date_time: NaiveDateTime,   // 班次结束
    pub employee_id: Option<i64>,       // 当前受派员工 (None = 空班)
}

impl Shift {
    /// 判断班次是否已指派员工
    pub fn is_assigned(&self) -> bool {
        self.employee_id.is_some()
    }
}

// ==========================================
// Roster - 排班数据集快照
// ==========================================
// 实体按竞技场方式集中存放,shifts 的向量顺序即数据集的规范班次顺序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub skills: Vec<Skill>,                         // 技能表
    pub spots: Vec<Spot>,                           // 岗位表
    pub employees: Vec<Employee>,                   // 员工表
    pub availabilities: Vec<EmployeeAvailability>,  // 可用性表
    pub shifts: Vec<Shift>,                         // 班次表 (规范顺序)
}

impl Roster {
    /// 班次总数
    pub fn shift_count(&self) -> usize {
        self.shifts.len()
    }

    /// 员工总数
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }
}
