// ==========================================
// 排班数据集生成器
// ==========================================
// 用途: 生成确定性的合成排班数据集,作为回放的初始快照
// 说明: 同一基准日期与同一参数生成的快照结构完全一致,
//       全部实体共用一条ID序列,标识符进程内唯一
// ==========================================

use chrono::{Duration, Local, NaiveDate};

use crate::domain::roster::{Employee, EmployeeAvailability, Roster, Shift, Skill, Spot};
use crate::domain::types::AvailabilityState;

// 技能目录
const SKILL_NAMES: &[&str] = &["急救", "消防", "叉车", "质检"];

// 每岗位每日班次数 (早/中/夜)
const SLOTS_PER_DAY: usize = 3;

// 单个班次时长(小时)
const SHIFT_HOURS: i64 = 8;

// 早班开始时刻
const FIRST_SLOT_HOUR: i64 = 6;

// ==========================================
// ID 序列
// ==========================================
struct IdSequence {
    next_id: i64,
}

impl IdSequence {
    fn new() -> Self {
        Self { next_id: 1 }
    }

    fn next(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

// ==========================================
// RosterGenerator - 数据集生成器
// ==========================================
pub struct RosterGenerator {
    base_date: NaiveDate,
}

impl RosterGenerator {
    /// 创建以当天为基准日期的生成器
    pub fn new() -> Self {
        Self {
            base_date: Local::now().date_naive(),
        }
    }

    /// 创建指定基准日期的生成器 (测试可复现)
    pub fn with_base_date(base_date: NaiveDate) -> Self {
        Self { base_date }
    }

    /// 生成排班数据集快照
    ///
    /// 班次按 岗位 × 每日三班 平铺,约四分之三的班次带初始受派员工。
    /// 任一数量为零时返回对应为空的数据集
    pub fn generate(&self, employee_count: usize, shift_count: usize, spot_count: usize) -> Roster {
        let mut id_seq = IdSequence::new();

        // 技能表
        let skills: Vec<Skill> = SKILL_NAMES
            .iter()
            .map(|name| Skill {
                id: id_seq.next(),
                name: name.to_string(),
            })
            .collect();

        // 岗位表: 每第三个岗位不要求技能
        let spots: Vec<Spot> = (0..spot_count)
            .map(|i| Spot {
                id: id_seq.next(),
                name: format!("岗位{:03}", i + 1),
                required_skill_id: if i % 3 == 2 {
                    None
                } else {
                    Some(skills[i % skills.len()].id)
                },
            })
            .collect();

        // 员工表: 按模式掌握一到两项技能
        let employees: Vec<Employee> = (0..employee_count)
            .map(|i| {
                let mut skill_ids = vec![skills[i % skills.len()].id];
                if i % 2 == 0 {
                    skill_ids.push(skills[(i + 1) % skills.len()].id);
                }
                Employee {
                    id: id_seq.next(),
                    name: format!("员工{:04}", i + 1),
                    skill_ids,
                }
            })
            .collect();

        // 班次表: 向量顺序即数据集规范班次顺序
        let mut shifts: Vec<Shift> = Vec::with_capacity(shift_count);
        if !spots.is_empty() {
            for idx in 0..shift_count {
                let spot = &spots[idx % spots.len()];
                let day = (idx / (spots.len() * SLOTS_PER_DAY)) as i64;
                let slot = ((idx / spots.len()) % SLOTS_PER_DAY) as i64;
                let start = self.base_date.and_hms_opt(0, 0, 0).unwrap_or_default()
                    + Duration::days(day)
                    + Duration::hours(FIRST_SLOT_HOUR + slot * SHIFT_HOURS);

                // 每第四个班次保持空班
                let employee_id = if employees.is_empty() || idx % 4 == 3 {
                    None
                } else {
                    Some(employees[idx % employees.len()].id)
                };

                shifts.push(Shift {
                    id: id_seq.next(),
                    spot_id: spot.id,
                    start_date_time: start,
                    end_date_time: start + Duration::hours(SHIFT_HOURS),
                    employee_id,
                });
            }
        }

        // 可用性表: 每员工每天一条,状态按模式轮转
        let day_span = if spots.is_empty() {
            0
        } else {
            shift_count.div_ceil(spots.len() * SLOTS_PER_DAY)
        };
        let mut availabilities: Vec<EmployeeAvailability> =
            Vec::with_capacity(employee_count * day_span);
        for (emp_idx, employee) in employees.iter().enumerate() {
            for day in 0..day_span {
                let start = self.base_date.and_hms_opt(0, 0, 0).unwrap_or_default()
                    + Duration::days(day as i64);
                let state = match (emp_idx + day) % 3 {
                    0 => AvailabilityState::Desired,
                    1 => AvailabilityState::Undesired,
                    _ => AvailabilityState::Unavailable,
                };
                availabilities.push(EmployeeAvailability {
                    id: id_seq.next(),
                    employee_id: employee.id,
                    start_date_time: start,
                    end_date_time: start + Duration::days(1),
                    state,
                });
            }
        }

        Roster {
            skills,
            spots,
            employees,
            availabilities,
            shifts,
        }
    }
}

impl Default for RosterGenerator {
    fn default() -> Self {
        Self::new()
    }
}
