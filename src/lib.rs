// ==========================================
// 排班回放诊断系统 - 核心库
// ==========================================
// 用途: 复现规则引擎在移动/撤销节奏下的内存滞留缺陷
// 方式: 合成数据集 → 注册事实 → 逐条回放移动日志
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 生成层 - 合成数据集
pub mod generator;

// 引擎层 - 日志解析与回放驱动
pub mod engine;

// 配置层 - 运行配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AvailabilityState, RecordKind};

// 领域实体
pub use domain::{Employee, EmployeeAvailability, Roster, Shift, Skill, Spot};

// 生成器
pub use generator::RosterGenerator;

// 引擎
pub use engine::{
    insert_roster_facts, Assignment, MoveLogReader, MoveRecord, NoOpWorkingSet, ParsedRecord,
    RecordingWorkingSet, ReplayConfig, ReplayDriver, ReplayError, ReplayReport, ReplayResult,
    RosterFact, RosterIndex, SolutionRecord, WorkingSet, WorkingSetCall, EMPLOYEE_FIELD,
};

// 配置
pub use config::HarnessConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "排班回放诊断系统";
