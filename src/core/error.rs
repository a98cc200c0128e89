use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("IO错误: {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("连接错误: {0}")]
    ConnectError(#[source] sqlx::Error),

    #[error("第 {index} 条语句执行失败: {source}")]
    ExecutionError {
        index: usize,
        statement: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("输出错误: {0}")]
    OutputError(#[from] serde_json::Error),
}

impl LoaderError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LoaderError::IoError {
            path: path.into(),
            source,
        }
    }

    // 获取详细的错误信息
    pub fn detailed_message(&self) -> String {
        match self {
            LoaderError::IoError { path, source } => {
                format!("IO错误: 无法读取 {}: {}", path.display(), source)
            }
            LoaderError::ConfigError(msg) => format!("配置错误: {}", msg),
            LoaderError::ConnectError(err) => format!("连接错误: {}", err),
            LoaderError::ExecutionError { index, statement, source } => {
                format!("第 {} 条语句执行失败: {}\n语句: {}", index, source, statement)
            }
            LoaderError::OutputError(err) => format!("输出错误: {}", err),
        }
    }

    // 获取简略的错误信息
    pub fn brief_message(&self) -> String {
        match self {
            LoaderError::IoError { .. } => "Error: IO error".to_string(),
            LoaderError::ConfigError(_) => "Error: Config error".to_string(),
            LoaderError::ConnectError(_) => "Error: Connect error".to_string(),
            LoaderError::ExecutionError { index, .. } => {
                format!("Error: Statement #{} failed", index)
            }
            LoaderError::OutputError(_) => "Error: Output error".to_string(),
        }
    }
}
