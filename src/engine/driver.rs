// ==========================================
// 排班回放诊断系统 - 回放驱动
// ==========================================
// 职责: 按序消费记录,把变更推入工作集并触发重评估
// 红线: 正向应用与撤销应用是两个独立的通知阶段,
//       不合并,不批处理 —— 缺陷对该节奏敏感
// ==========================================

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::roster::Roster;
use crate::engine::error::{ReplayError, ReplayResult};
use crate::engine::index::RosterIndex;
use crate::engine::log_reader::MoveLogReader;
use crate::engine::record::{Assignment, MoveRecord, ParsedRecord, SolutionRecord};
use crate::engine::working_set::{WorkingSet, EMPLOYEE_FIELD};

// ==========================================
// ReplayConfig - 回放配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    pub reevaluate_after_forward: bool, // 正向应用后、撤销前触发重评估: true
    pub reevaluate_after_inverse: bool, // 撤销应用后再次触发重评估: false
    pub accept_partial_solution: bool,  // 接受行数不足的完整方案记录: false
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            reevaluate_after_forward: true,
            reevaluate_after_inverse: false,
            accept_partial_solution: false,
        }
    }
}

// ==========================================
// ReplayReport - 回放结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayReport {
    pub run_id: String,             // 回放运行ID
    pub records_total: usize,       // 记录总数
    pub move_records: usize,        // 移动记录数
    pub solution_records: usize,    // 完整方案记录数
    pub forward_assignments: usize, // 正向指派次数 (含基线覆写)
    pub inverse_assignments: usize, // 撤销指派次数
    pub reevaluate_calls: usize,    // 重评估次数
    pub elapsed_ms: i64,            // 耗时(毫秒)
}

impl ReplayReport {
    fn new() -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            records_total: 0,
            move_records: 0,
            solution_records: 0,
            forward_assignments: 0,
            inverse_assignments: 0,
            reevaluate_calls: 0,
            elapsed_ms: 0,
        }
    }
}

// ==========================================
// ReplayDriver - 回放驱动
// ==========================================
// 回放期间独占数据集快照与标识符索引
pub struct ReplayDriver<W: WorkingSet> {
    roster: Roster,
    index: RosterIndex,
    working_set: W,
    config: ReplayConfig,
}

impl<W: WorkingSet> ReplayDriver<W> {
    /// 创建带默认配置的回放驱动
    pub fn new(roster: Roster, working_set: W) -> Self {
        Self::with_config(roster, working_set, ReplayConfig::default())
    }

    /// 创建回放驱动
    pub fn with_config(roster: Roster, working_set: W, config: ReplayConfig) -> Self {
        let index = RosterIndex::build(&roster);
        Self {
            roster,
            index,
            working_set,
            config,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn working_set(&self) -> &W {
        &self.working_set
    }

    pub fn config(&self) -> &ReplayConfig {
        &self.config
    }

    /// 拆出工作集,供回放结束后检查
    pub fn into_working_set(self) -> W {
        self.working_set
    }

    /// 从文件回放移动日志
    pub fn replay_path(&mut self, path: &Path) -> ReplayResult<ReplayReport> {
        let file = File::open(path)?;
        self.replay(BufReader::new(file))
    }

    /// 回放一份移动日志
    ///
    /// 任何格式/解析/越界错误都会中止本次回放并以 `Err` 返回,
    /// 是否继续由调用方决定
    pub fn replay<R: BufRead>(&mut self, input: R) -> ReplayResult<ReplayReport> {
        let started = Instant::now();
        let mut report = ReplayReport::new();
        let mut reader = MoveLogReader::new(input);

        tracing::info!(
            "开始回放: run_id={}, 班次 {} 个, 员工 {} 人",
            report.run_id,
            self.roster.shift_count(),
            self.roster.employee_count()
        );

        while let Some(record) = reader.next_record(&self.roster, &self.index)? {
            tracing::debug!("记录 #{}: {}", report.records_total + 1, record.kind());
            match record {
                ParsedRecord::Move(record) => self.apply_move_record(&record, &mut report)?,
                ParsedRecord::Solution(record) => {
                    self.apply_solution_record(&record, &mut report)?
                }
            }
            report.records_total += 1;
        }

        report.elapsed_ms = started.elapsed().as_millis() as i64;
        tracing::info!(
            "回放完成: run_id={}, 记录 {} 条 (移动 {}, 方案 {}), 指派 {}+{}, 重评估 {} 次, 耗时 {}ms",
            report.run_id,
            report.records_total,
            report.move_records,
            report.solution_records,
            report.forward_assignments,
            report.inverse_assignments,
            report.reevaluate_calls,
            report.elapsed_ms
        );
        Ok(report)
    }

    /// 应用一条移动记录: 正向 → (重评估) → 撤销 → (重评估)
    fn apply_move_record(
        &mut self,
        record: &MoveRecord,
        report: &mut ReplayReport,
    ) -> ReplayResult<()> {
        for assignment in &record.forward {
            self.apply_assignment(assignment)?;
        }
        report.forward_assignments += record.forward.len();

        // 空撤销 = 无事可撤,跳过中间重评估阶段
        if !record.inverse.is_empty() {
            if self.config.reevaluate_after_forward {
                self.reevaluate(report)?;
            }
            for assignment in &record.inverse {
                self.apply_assignment(assignment)?;
            }
            report.inverse_assignments += record.inverse.len();
            if self.config.reevaluate_after_inverse {
                self.reevaluate(report)?;
            }
        }

        report.move_records += 1;
        Ok(())
    }

    /// 应用一条完整方案记录: 按规范顺序整体覆写为新基线,无撤销阶段
    fn apply_solution_record(
        &mut self,
        record: &SolutionRecord,
        report: &mut ReplayReport,
    ) -> ReplayResult<()> {
        let expected = self.roster.shift_count();
        if record.baseline.len() < expected && !self.config.accept_partial_solution {
            return Err(ReplayError::IncompleteSolution {
                expected,
                actual: record.baseline.len(),
            });
        }

        for assignment in &record.baseline {
            self.apply_assignment(assignment)?;
        }
        report.forward_assignments += record.baseline.len();
        report.solution_records += 1;
        Ok(())
    }

    /// 应用一次指派: 写入班次字段并逐条通知工作集
    fn apply_assignment(&mut self, assignment: &Assignment) -> ReplayResult<()> {
        let pos = self.index.shift_pos(assignment.shift_id)?;
        self.roster.shifts[pos].employee_id = assignment.employee_id;
        self.working_set
            .set_field(
                &self.roster.shifts[pos],
                EMPLOYEE_FIELD,
                assignment.employee_id,
            )
            .map_err(|e| ReplayError::WorkingSet(e.to_string()))
    }

    /// 触发一次同步重评估
    fn reevaluate(&mut self, report: &mut ReplayReport) -> ReplayResult<()> {
        self.working_set
            .reevaluate()
            .map_err(|e| ReplayError::WorkingSet(e.to_string()))?;
        report.reevaluate_calls += 1;
        Ok(())
    }
}
