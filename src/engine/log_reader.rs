// ==========================================
// 排班回放诊断系统 - 移动日志读取器
// ==========================================
// 职责: 逐行消费日志文本,产出依次闭合的记录
// 格式: 记录以 <MOVE>/<SOLUTION> 起始,以对应结束标签闭合,
//       记录不可嵌套、不可交叠;空行是日志结束哨兵
// ==========================================

use std::io::BufRead;

use crate::domain::roster::Roster;
use crate::domain::types::RecordKind;
use crate::engine::error::{ReplayError, ReplayResult};
use crate::engine::index::RosterIndex;
use crate::engine::record::{ParsedRecord, RecordHandler};

// ==========================================
// MoveLogReader - 移动日志读取器
// ==========================================
// 状态机只有两个状态: 空闲 / 记录内,由 `open` 是否持有处理器表达。
// 记录必须完全闭合后才允许开启下一条,绝不发生记录内 → 记录内的迁移
pub struct MoveLogReader<R: BufRead> {
    input: R,
    line_no: usize,
    finished: bool,
}

impl<R: BufRead> MoveLogReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line_no: 0,
            finished: false,
        }
    }

    /// 当前已读取的行号 (1 起始)
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// 读取下一条完整记录
    ///
    /// 返回 `Ok(None)` 表示日志结束 (输入耗尽或遇到空行哨兵)。
    /// 记录闭合前遇到日志结束时,丢弃未完成记录并告警
    pub fn next_record(
        &mut self,
        roster: &Roster,
        index: &RosterIndex,
    ) -> ReplayResult<Option<ParsedRecord>> {
        if self.finished {
            return Ok(None);
        }

        let mut open: Option<(RecordKind, RecordHandler<'_>)> = None;

        loop {
            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    self.finished = true;
                    if let Some((kind, _)) = open {
                        tracing::warn!(
                            "日志在 {} 记录闭合前终止 (行 {}),丢弃未完成记录",
                            kind,
                            self.line_no
                        );
                    }
                    return Ok(None);
                }
            };

            match open.take() {
                None => {
                    let kind = RecordKind::from_start_tag(&line).ok_or_else(|| {
                        ReplayError::UnrecognizedStartTag {
                            line_no: self.line_no,
                            line: line.clone(),
                        }
                    })?;
                    open = Some((kind, RecordHandler::new(kind, roster, index)));
                }
                Some((kind, mut handler)) => {
                    if kind.is_end(&line) {
                        return handler.finish().map(Some);
                    }
                    if let Some(other) = RecordKind::from_end_tag(&line) {
                        return Err(ReplayError::MismatchedEndTag {
                            line_no: self.line_no,
                            expected: kind.end_tag().to_string(),
                            actual: other.end_tag().to_string(),
                        });
                    }
                    // 其余行原样交给处理器
                    handler.ingest_line(&line, self.line_no)?;
                    open = Some((kind, handler));
                }
            }
        }
    }

    /// 读取一行并去掉行尾换行符
    ///
    /// 返回 `Ok(None)` 表示输入耗尽或空行哨兵
    fn read_line(&mut self) -> ReplayResult<Option<String>> {
        let mut buf = String::new();
        let bytes = self.input.read_line(&mut buf)?;
        if bytes == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        if buf.is_empty() {
            return Ok(None);
        }
        Ok(Some(buf))
    }
}
