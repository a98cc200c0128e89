use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use crate::core::error::LoaderError;
use crate::core::sql::StatementSplitter;

/// 逐行读取并拆分 SQL 语句
pub fn read_statements<R: BufRead>(reader: R, path: &Path) -> Result<Vec<String>, LoaderError> {
    let mut splitter = StatementSplitter::new();
    for line in reader.lines() {
        let line = line.map_err(|e| LoaderError::io(path, e))?;
        splitter.push_line(&line);
    }
    Ok(splitter.finish())
}

/// 打开 SQL 文件并拆分为语句序列
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<String>, LoaderError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoaderError::io(path, e))?;
    let statements = read_statements(BufReader::new(file), path)?;
    tracing::debug!(path = %path.display(), count = statements.len(), "SQL 文件拆分完成");
    Ok(statements)
}
