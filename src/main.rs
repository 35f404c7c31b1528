// ==========================================
// 排班回放诊断系统 - 主入口
// ==========================================
// 流程: 加载配置 → 生成数据集 → 注册事实 → 回放移动日志
// 用法: roster-replay [config.json]
// ==========================================

use std::path::Path;
use std::process::ExitCode;

use roster_replay::engine::{insert_roster_facts, RecordingWorkingSet, ReplayDriver};
use roster_replay::{logging, HarnessConfig, RosterGenerator};

fn main() -> ExitCode {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", roster_replay::APP_NAME);
    tracing::info!("系统版本: {}", roster_replay::VERSION);
    tracing::info!("==================================================");

    // 配置文件路径可由首个参数覆写
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "roster_replay.json".to_string());
    let config = HarnessConfig::load_or_default(Path::new(&config_path));

    // 生成初始数据集快照
    tracing::info!(
        "生成数据集: 员工 {}, 班次 {}, 岗位 {}",
        config.employee_count,
        config.shift_count,
        config.spot_count
    );
    let roster =
        RosterGenerator::new().generate(config.employee_count, config.shift_count, config.spot_count);

    // 构建工作集并注册全部事实
    // 未接入真实引擎会话时以记录型工作集代替,保持调用节奏可观测
    let mut working_set = RecordingWorkingSet::new();
    if let Err(e) = insert_roster_facts(&mut working_set, &roster) {
        tracing::error!("事实注册失败: {}", e);
        return ExitCode::FAILURE;
    }

    // 回放移动日志
    let mut driver = ReplayDriver::with_config(roster, working_set, config.replay.clone());
    match driver.replay_path(Path::new(&config.move_list_path)) {
        Ok(report) => {
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => tracing::error!("结果序列化失败: {}", e),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("回放中止: {}", e);
            ExitCode::FAILURE
        }
    }
}
