/// 单行注释标记
pub const COMMENT_MARKER: &str = "--";
/// 语句结束符
pub const TERMINATOR: char = ';';

/// 将一行输入并入已累积的语句序列
///
/// 只有序列的最后一个元素可能处于未结束状态。规则：
/// * 以 `--` 开头的行，或最后一个元素已包含 `--` 时，该行作为新元素追加，不与任何内容合并
/// * 否则按 `;` 拆分该行：第一段在最后一个元素未以 `;` 结尾时续接到它后面，
///   以 `--` 开头的段也续接到最后一个元素；其余段作为新元素
/// * 段后原本跟有 `;` 的，在刚接收内容的元素末尾补回 `;`
/// * 空白段直接丢弃
pub fn feed(line: &str, mut statements: Vec<String>) -> Vec<String> {
    let after_comment = statements
        .last()
        .map_or(false, |last| last.contains(COMMENT_MARKER));

    if line.starts_with(COMMENT_MARKER) || after_comment {
        statements.push(line.to_string());
        return statements;
    }

    let parts: Vec<&str> = line.split(TERMINATOR).collect();
    let last_index = parts.len() - 1;

    for (i, part) in parts.iter().enumerate() {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let continues_open = i == 0
            && statements
                .last()
                .map_or(false, |last| !last.ends_with(TERMINATOR));

        match statements.last_mut() {
            Some(last) if continues_open || part.starts_with(COMMENT_MARKER) => {
                last.push(' ');
                last.push_str(part);
            }
            _ => statements.push(part.to_string()),
        }

        // 该段后面原本跟着结束符
        if i != last_index {
            if let Some(last) = statements.last_mut() {
                last.push(TERMINATOR);
            }
        }
    }

    statements
}

/// 判断语句是否为纯注释
pub fn is_comment(statement: &str) -> bool {
    statement.trim_start().starts_with(COMMENT_MARKER)
}

/// 逐行累积 SQL 语句
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StatementSplitter {
    statements: Vec<String>,
}

impl StatementSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 去掉首尾空白后送入累积器，空行忽略
    pub fn push_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        let statements = std::mem::take(&mut self.statements);
        self.statements = feed(line, statements);
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn finish(self) -> Vec<String> {
        self.statements
    }
}

/// 拆分一整段 SQL 脚本
pub fn split_script(text: &str) -> Vec<String> {
    let mut splitter = StatementSplitter::new();
    for line in text.lines() {
        splitter.push_line(line);
    }
    splitter.finish()
}
