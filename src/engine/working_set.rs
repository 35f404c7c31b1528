// ==========================================
// 排班回放诊断系统 - 工作集适配层
// ==========================================
// 职责: 定义外部规则引擎会话的注入接口,实现依赖倒置
// 说明: 生产环境接入真实引擎会话,测试环境接入记录型假实现
// ==========================================

use std::collections::HashMap;
use std::error::Error;

use crate::domain::roster::{Employee, EmployeeAvailability, Roster, Shift, Skill, Spot};

/// 班次上唯一会被回放修改的字段名
pub const EMPLOYEE_FIELD: &str = "employee";

// ==========================================
// 领域事实
// ==========================================

/// 启动时注册进工作集的领域事实
///
/// 引擎会话对每个事实各注册一次,此后只通过 `set_field` 感知变更
#[derive(Debug, Clone, Copy)]
pub enum RosterFact<'a> {
    Skill(&'a Skill),
    Spot(&'a Spot),
    Employee(&'a Employee),
    Availability(&'a EmployeeAvailability),
    Shift(&'a Shift),
}

impl RosterFact<'_> {
    /// 事实类别标识
    pub fn kind(&self) -> &'static str {
        match self {
            RosterFact::Skill(_) => "Skill",
            RosterFact::Spot(_) => "Spot",
            RosterFact::Employee(_) => "Employee",
            RosterFact::Availability(_) => "EmployeeAvailability",
            RosterFact::Shift(_) => "Shift",
        }
    }

    /// 事实的实体ID
    pub fn id(&self) -> i64 {
        match self {
            RosterFact::Skill(s) => s.id,
            RosterFact::Spot(s) => s.id,
            RosterFact::Employee(e) => e.id,
            RosterFact::Availability(a) => a.id,
            RosterFact::Shift(s) => s.id,
        }
    }
}

// ==========================================
// 工作集 Trait
// ==========================================

/// 工作集适配接口
///
/// 回放驱动只依赖此接口向外部规则引擎推送变更:
/// - `insert_fact`: 启动时注册领域事实
/// - `set_field`: 登记一次字段变更,保持引擎内部一致性跟踪正确
/// - `reevaluate`: 同步阻塞地把全部待定变更传播到收敛
///
/// 三个操作都被视为高开销操作,调用次数必须与回放节奏严格一致,
/// 不做合并,不做批处理
pub trait WorkingSet {
    /// 注册一个领域事实
    fn insert_fact(&mut self, fact: RosterFact<'_>) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// 登记一次班次字段变更 (班次实体已携带新值)
    fn set_field(
        &mut self,
        shift: &Shift,
        field: &'static str,
        employee_id: Option<i64>,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// 强制传播全部待定变更,阻塞至收敛
    fn reevaluate(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;
}

/// 把数据集快照的全部事实注册进工作集
///
/// 回放开始前的前置步骤,每个实体恰好注册一次
pub fn insert_roster_facts<W: WorkingSet>(
    working_set: &mut W,
    roster: &Roster,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    for skill in &roster.skills {
        working_set.insert_fact(RosterFact::Skill(skill))?;
    }
    for spot in &roster.spots {
        working_set.insert_fact(RosterFact::Spot(spot))?;
    }
    for employee in &roster.employees {
        working_set.insert_fact(RosterFact::Employee(employee))?;
    }
    for availability in &roster.availabilities {
        working_set.insert_fact(RosterFact::Availability(availability))?;
    }
    for shift in &roster.shifts {
        working_set.insert_fact(RosterFact::Shift(shift))?;
    }
    Ok(())
}

// ==========================================
// 空操作实现
// ==========================================

/// 空操作工作集
///
/// 用于未接入真实引擎的场景(如冒烟运行)
#[derive(Debug, Clone, Default)]
pub struct NoOpWorkingSet;

impl WorkingSet for NoOpWorkingSet {
    fn insert_fact(&mut self, fact: RosterFact<'_>) -> Result<(), Box<dyn Error + Send + Sync>> {
        tracing::debug!(
            "NoOpWorkingSet: 跳过事实注册 - kind={}, id={}",
            fact.kind(),
            fact.id()
        );
        Ok(())
    }

    fn set_field(
        &mut self,
        shift: &Shift,
        field: &'static str,
        employee_id: Option<i64>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        tracing::debug!(
            "NoOpWorkingSet: 跳过字段变更 - shift_id={}, field={}, employee_id={:?}",
            shift.id,
            field,
            employee_id
        );
        Ok(())
    }

    fn reevaluate(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        tracing::debug!("NoOpWorkingSet: 跳过重评估");
        Ok(())
    }
}

// ==========================================
// 记录型实现
// ==========================================

/// 工作集调用记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkingSetCall {
    /// 事实注册
    InsertFact { kind: &'static str, id: i64 },
    /// 字段变更登记
    SetField {
        shift_id: i64,
        field: &'static str,
        employee_id: Option<i64>,
    },
    /// 重评估
    Reevaluate,
}

/// 记录型工作集
///
/// 按序记录全部调用,并维护 班次ID → 受派员工 的本地镜像,
/// 供测试断言调用节奏与最终状态
#[derive(Debug, Clone, Default)]
pub struct RecordingWorkingSet {
    calls: Vec<WorkingSetCall>,
    mirror: HashMap<i64, Option<i64>>,
}

impl RecordingWorkingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 全部调用记录 (按发生顺序)
    pub fn calls(&self) -> &[WorkingSetCall] {
        &self.calls
    }

    /// 本地镜像中某班次的受派员工
    ///
    /// 外层 None 表示该班次从未被 `set_field` 触达
    pub fn mirror_employee(&self, shift_id: i64) -> Option<Option<i64>> {
        self.mirror.get(&shift_id).copied()
    }

    /// 事实注册次数
    pub fn insert_fact_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, WorkingSetCall::InsertFact { .. }))
            .count()
    }

    /// 字段变更次数
    pub fn set_field_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, WorkingSetCall::SetField { .. }))
            .count()
    }

    /// 重评估次数
    pub fn reevaluate_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, WorkingSetCall::Reevaluate))
            .count()
    }
}

impl WorkingSet for RecordingWorkingSet {
    fn insert_fact(&mut self, fact: RosterFact<'_>) -> Result<(), Box<dyn Error + Send + Sync>> {
        if let RosterFact::Shift(shift) = fact {
            self.mirror.insert(shift.id, shift.employee_id);
        }
        self.calls.push(WorkingSetCall::InsertFact {
            kind: fact.kind(),
            id: fact.id(),
        });
        Ok(())
    }

    fn set_field(
        &mut self,
        shift: &Shift,
        field: &'static str,
        employee_id: Option<i64>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.mirror.insert(shift.id, employee_id);
        self.calls.push(WorkingSetCall::SetField {
            shift_id: shift.id,
            field,
            employee_id,
        });
        Ok(())
    }

    fn reevaluate(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.calls.push(WorkingSetCall::Reevaluate);
        Ok(())
    }
}
