// ==========================================
// 完整方案记录回放测试
// ==========================================
// 职责: 验证基线覆写语义与完整性策略
// ==========================================


use roster_replay::{RecordingWorkingSet, ReplayConfig, ReplayDriver, ReplayError, WorkingSetCall};
use test_helpers::scenario_roster;

// ==========================================
// 测试1: 完整方案按规范顺序覆写全部班次
// ==========================================
#[test]
fn test_full_solution_replaces_baseline() {
    let mut driver = ReplayDriver::new(scenario_roster(), RecordingWorkingSet::new());
    let report = driver
        .replay("<SOLUTION>\n137\n42\nnull\n</SOLUTION>\n".as_bytes())
        .unwrap();

    assert_eq!(report.records_total, 1);
    assert_eq!(report.solution_records, 1);
    assert_eq!(report.forward_assignments, 3);
    // 基线覆写无撤销阶段,也不触发重评估
    assert_eq!(report.inverse_assignments, 0);
    assert_eq!(report.reevaluate_calls, 0);

    let assignees: Vec<Option<i64>> = driver.roster().shifts.iter().map(|s| s.employee_id).collect();
    assert_eq!(assignees, vec![Some(137), Some(42), None]);

    // 登记顺序与规范班次顺序一致
    let shift_ids: Vec<i64> = driver
        .working_set()
        .calls()
        .iter()
        .filter_map(|c| match c {
            WorkingSetCall::SetField { shift_id, .. } => Some(*shift_id),
            _ => None,
        })
        .collect();
    assert_eq!(shift_ids, vec![9471, 9472, 9473]);
}

// ==========================================
// 测试2: 新基线成为后续移动记录的撤销基准
// ==========================================
#[test]
fn test_moves_after_solution_use_new_baseline() {
    let mut driver = ReplayDriver::new(scenario_roster(), RecordingWorkingSet::new());
    let log = "<SOLUTION>\n137\n42\nnull\n</SOLUTION>\n<MOVE>\nnull\n9471\n</MOVE>\n";
    driver.replay(log.as_bytes()).unwrap();

    // 移动的撤销恢复的是新基线的受派员工 137,而非原始的 42
    let shift = driver.roster().shifts.iter().find(|s| s.id == 9471).unwrap();
    assert_eq!(shift.employee_id, Some(137));
}

// ==========================================
// 测试3: 场景 - 行数不足默认判为不完整
// ==========================================
#[test]
fn test_incomplete_solution_rejected_by_default() {
    let mut driver = ReplayDriver::new(scenario_roster(), RecordingWorkingSet::new());
    let err = driver
        .replay("<SOLUTION>\n137\n</SOLUTION>\n".as_bytes())
        .unwrap_err();

    match err {
        ReplayError::IncompleteSolution { expected, actual } => {
            assert_eq!(expected, 3);
            assert_eq!(actual, 1);
        }
        other => panic!("意外错误: {other}"),
    }
    // 基线未被应用
    assert!(driver.working_set().calls().is_empty());
}

// ==========================================
// 测试4: 配置允许时接受部分基线
// ==========================================
// 未覆盖的班次保持原受派员工
#[test]
fn test_partial_solution_accepted_when_configured() {
    let config = ReplayConfig {
        accept_partial_solution: true,
        ..ReplayConfig::default()
    };
    let mut driver = ReplayDriver::with_config(scenario_roster(), RecordingWorkingSet::new(), config);
    let report = driver
        .replay("<SOLUTION>\n137\n</SOLUTION>\n".as_bytes())
        .unwrap();

    assert_eq!(report.solution_records, 1);
    assert_eq!(report.forward_assignments, 1);

    let assignees: Vec<Option<i64>> = driver.roster().shifts.iter().map(|s| s.employee_id).collect();
    // 位置 0 覆写为 137,其余保持 None / 137
    assert_eq!(assignees, vec![Some(137), None, Some(137)]);
}

// ==========================================
// 测试5: 行数超出班次总数判为越界
// ==========================================
#[test]
fn test_solution_with_excess_lines_is_out_of_range() {
    let mut driver = ReplayDriver::new(scenario_roster(), RecordingWorkingSet::new());
    let err = driver
        .replay("<SOLUTION>\n137\n42\nnull\n137\n</SOLUTION>\n".as_bytes())
        .unwrap_err();

    assert!(matches!(
        err,
        ReplayError::SolutionOutOfRange {
            position: 3,
            shift_count: 3
        }
    ));
}

// ==========================================
// 测试6: 方案与移动混排
// ==========================================
#[test]
fn test_mixed_records_cadence() {
    let mut driver = ReplayDriver::new(scenario_roster(), RecordingWorkingSet::new());
    let log = "<MOVE>\n137\n9471\n</MOVE>\n<SOLUTION>\nnull\nnull\nnull\n</SOLUTION>\n<MOVE>\n42\n9473\n</MOVE>\n";
    let report = driver.replay(log.as_bytes()).unwrap();

    assert_eq!(report.records_total, 3);
    assert_eq!(report.move_records, 2);
    assert_eq!(report.solution_records, 1);
    // 重评估只发生在两条移动记录的正向/撤销之间
    assert_eq!(report.reevaluate_calls, 2);

    // 第二条移动的撤销基准来自全空基线
    let shift = driver.roster().shifts.iter().find(|s| s.id == 9473).unwrap();
    assert_eq!(shift.employee_id, None);
}
