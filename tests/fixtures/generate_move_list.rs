// ==========================================
// 移动日志生成器
// ==========================================
// 用途: 为回放生成合成 MOVE_LIST.txt
// 输出: 移动记录与完整方案记录混排,模式确定可复现
// ==========================================

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};

use chrono::NaiveDate;
use roster_replay::RosterGenerator;

// 数据集规模
const EMPLOYEE_COUNT: usize = 20;
const SHIFT_COUNT: usize = 240;
const SPOT_COUNT: usize = 8;

// 记录条数
const RECORD_COUNT: usize = 50;

// 每第几条记录产出一条完整方案
const SOLUTION_EVERY: usize = 10;

fn main() -> Result<(), Box<dyn Error>> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "MOVE_LIST.txt".to_string());

    let roster = RosterGenerator::with_base_date(
        NaiveDate::from_ymd_opt(2026, 1, 5).ok_or("非法基准日期")?,
    )
    .generate(EMPLOYEE_COUNT, SHIFT_COUNT, SPOT_COUNT);

    let file = File::create(&output_path)?;
    let mut writer = BufWriter::new(file);

    let mut move_count = 0usize;
    let mut solution_count = 0usize;

    for record_idx in 0..RECORD_COUNT {
        if record_idx % SOLUTION_EVERY == SOLUTION_EVERY - 1 {
            // 完整方案: 按规范顺序为每个班次给出受派员工
            writeln!(writer, "<SOLUTION>")?;
            for (shift_idx, _) in roster.shifts.iter().enumerate() {
                if (shift_idx + record_idx) % 5 == 0 {
                    writeln!(writer, "null")?;
                } else {
                    let employee = &roster.employees[(shift_idx + record_idx) % roster.employees.len()];
                    writeln!(writer, "{}", employee.id)?;
                }
            }
            writeln!(writer, "</SOLUTION>")?;
            solution_count += 1;
        } else {
            // 移动: 目标员工 (每第五条取消指派) + 一到三个受影响班次
            writeln!(writer, "<MOVE>")?;
            if record_idx % 5 == 4 {
                writeln!(writer, "null")?;
            } else {
                writeln!(writer, "{}", roster.employees[record_idx % roster.employees.len()].id)?;
            }
            let affected = 1 + record_idx % 3;
            for offset in 0..affected {
                let shift = &roster.shifts[(record_idx * 7 + offset) % roster.shifts.len()];
                writeln!(writer, "{}", shift.id)?;
            }
            writeln!(writer, "</MOVE>")?;
            move_count += 1;
        }
    }

    writer.flush()?;
    println!(
        "已生成 {}: 移动记录 {} 条, 完整方案记录 {} 条",
        output_path, move_count, solution_count
    );
    Ok(())
}
