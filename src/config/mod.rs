// ==========================================
// 排班回放诊断系统 - 配置层
// ==========================================
// 职责: 回放运行配置管理
// ==========================================

pub mod harness_config;

pub use harness_config::{ConfigError, ConfigResult, HarnessConfig};
