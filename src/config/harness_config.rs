// ==========================================
// 排班回放诊断系统 - 运行配置
// ==========================================
// 职责: 配置文件加载,缺省值兜底
// 存储: JSON 文件 (serde_json)
// ==========================================

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::driver::ReplayConfig;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {0}")]
    FileReadError(String),

    #[error("配置文件解析失败: {0}")]
    ParseError(String),
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// HarnessConfig - 回放运行配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub move_list_path: String, // 移动日志路径: MOVE_LIST.txt
    pub employee_count: usize,  // 员工数: 100
    pub shift_count: usize,     // 班次数: 11200 (100 岗位 × 28 天 × 4 班)
    pub spot_count: usize,      // 岗位数: 100
    pub replay: ReplayConfig,   // 回放节奏配置
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            move_list_path: "MOVE_LIST.txt".to_string(),
            employee_count: 100,
            shift_count: 11_200,
            spot_count: 100,
            replay: ReplayConfig::default(),
        }
    }
}

impl HarnessConfig {
    /// 从 JSON 文件加载配置
    pub fn from_json_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileReadError(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 加载配置,文件缺失或损坏时回退到缺省值
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_json_file(path) {
            Ok(config) => {
                tracing::info!("已加载配置文件: {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("配置加载失败,使用缺省配置: {}", e);
                Self::default()
            }
        }
    }
}
