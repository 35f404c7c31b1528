// ==========================================
// 排班回放诊断系统 - 数据集生成层
// ==========================================
// 职责: 合成初始排班数据集快照
// ==========================================

pub mod roster_generator;

pub use roster_generator::RosterGenerator;
