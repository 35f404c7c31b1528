// ==========================================
// 排班回放诊断系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与共享类型
// 红线: 不含日志解析逻辑,不含回放驱动逻辑
// ==========================================

pub mod roster;
pub mod types;

// 重导出核心类型
pub use roster::{Employee, EmployeeAvailability, Roster, Shift, Skill, Spot};
pub use types::{AvailabilityState, RecordKind};
