// ==========================================
// 端到端回放流程测试
// ==========================================
// 职责: 生成数据集 → 注册事实 → 写日志文件 → 从磁盘回放
// ==========================================


use roster_replay::{insert_roster_facts, RecordingWorkingSet, ReplayDriver};
use test_helpers::{small_roster, write_move_list};

// ==========================================
// 测试1: 完整流程 - 移动与撤销
// ==========================================
#[test]
fn test_full_flow_move_and_undo() {
    let roster = small_roster();
    let fact_total = roster.skills.len()
        + roster.spots.len()
        + roster.employees.len()
        + roster.availabilities.len()
        + roster.shifts.len();

    // 从生成的数据集中取真实标识符构造日志
    let shift = &roster.shifts[0];
    let prior_employee = shift.employee_id.unwrap();
    let target_employee = roster
        .employees
        .iter()
        .map(|e| e.id)
        .find(|id| *id != prior_employee)
        .unwrap();
    let log = format!("<MOVE>\n{}\n{}\n</MOVE>\n", target_employee, shift.id);
    let (_dir, path) = write_move_list(&log).unwrap();

    let mut working_set = RecordingWorkingSet::new();
    insert_roster_facts(&mut working_set, &roster).unwrap();
    assert_eq!(working_set.insert_fact_count(), fact_total);

    let shift_id = shift.id;
    let mut driver = ReplayDriver::new(roster, working_set);
    let report = driver.replay_path(&path).unwrap();

    assert!(!report.run_id.is_empty());
    assert_eq!(report.records_total, 1);
    assert_eq!(report.move_records, 1);
    assert_eq!(report.reevaluate_calls, 1);
    assert!(report.elapsed_ms >= 0);

    // 撤销后恢复原受派员工
    let replayed = driver.roster().shifts.iter().find(|s| s.id == shift_id).unwrap();
    assert_eq!(replayed.employee_id, Some(prior_employee));
}

// ==========================================
// 测试2: 完整流程 - 基线覆写后继续移动
// ==========================================
#[test]
fn test_full_flow_solution_then_move() {
    let roster = small_roster();
    let target = roster.employees[0].id;
    let first_shift = roster.shifts[0].id;

    // 全空基线 + 一条移动
    let mut log = String::from("<SOLUTION>\n");
    for _ in 0..roster.shift_count() {
        log.push_str("null\n");
    }
    log.push_str("</SOLUTION>\n");
    log.push_str(&format!("<MOVE>\n{}\n{}\n</MOVE>\n", target, first_shift));
    let (_dir, path) = write_move_list(&log).unwrap();

    let mut driver = ReplayDriver::new(roster, RecordingWorkingSet::new());
    let report = driver.replay_path(&path).unwrap();

    assert_eq!(report.records_total, 2);
    assert_eq!(report.solution_records, 1);
    assert_eq!(report.move_records, 1);

    // 基线清空了全部班次,移动的撤销把首班次恢复为空班
    assert!(driver.roster().shifts.iter().all(|s| s.employee_id.is_none()));
}

// ==========================================
// 测试3: 完整流程幂等性
// ==========================================
#[test]
fn test_full_flow_idempotent() {
    let log = {
        let roster = small_roster();
        let target = roster.employees[1].id;
        format!(
            "<MOVE>\n{}\n{}\n{}\n</MOVE>\n<MOVE>\nnull\n{}\n</MOVE>\n",
            target, roster.shifts[0].id, roster.shifts[1].id, roster.shifts[2].id
        )
    };
    let (_dir, path) = write_move_list(&log).unwrap();

    let mut first = ReplayDriver::new(small_roster(), RecordingWorkingSet::new());
    first.replay_path(&path).unwrap();

    let mut second = ReplayDriver::new(small_roster(), RecordingWorkingSet::new());
    second.replay_path(&path).unwrap();

    assert_eq!(first.roster(), second.roster());
}

// ==========================================
// 测试4: 日志文件缺失是 IO 错误
// ==========================================
#[test]
fn test_missing_log_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut driver = ReplayDriver::new(small_roster(), RecordingWorkingSet::new());
    let err = driver.replay_path(&dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, roster_replay::ReplayError::Io(_)));
}
