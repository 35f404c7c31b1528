// ==========================================
// 排班回放诊断系统 - 回放引擎层
// ==========================================
// 职责: 移动日志解析与回放驱动
// 数据流: 数据集快照 → 标识符索引 → 记录处理器 → 回放驱动 → 工作集
// ==========================================

pub mod driver;
pub mod error;
pub mod index;
pub mod log_reader;
pub mod record;
pub mod working_set;

// 重导出核心引擎
pub use driver::{ReplayConfig, ReplayDriver, ReplayReport};
pub use error::{ReplayError, ReplayResult};
pub use index::RosterIndex;
pub use log_reader::MoveLogReader;
pub use record::{Assignment, MoveRecord, ParsedRecord, SolutionRecord};
pub use working_set::{
    insert_roster_facts, NoOpWorkingSet, RecordingWorkingSet, RosterFact, WorkingSet,
    WorkingSetCall, EMPLOYEE_FIELD,
};
