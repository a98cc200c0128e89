use async_trait::async_trait;
use serde::Serialize;
use sqlx::{Connection, Executor, MySqlConnection};
use crate::core::config::DbConfig;
use crate::core::error::LoaderError;
use crate::core::sql::is_comment;

/// 能够执行一条 SQL 字符串的句柄
#[async_trait]
pub trait SqlExecutor: Send {
    /// 不带参数地执行语句，返回受影响的行数
    async fn execute(&mut self, sql: &str) -> Result<u64, sqlx::Error>;
}

/// 基于单个 MySQL 协议连接的执行器 (MySQL / TiDB)
pub struct MySqlExecutor {
    conn: MySqlConnection,
}

impl MySqlExecutor {
    pub async fn connect(config: &DbConfig) -> Result<Self, LoaderError> {
        config.validate()?;
        tracing::info!(dsn = %config.display_dsn(), "打开数据库连接");

        let conn = MySqlConnection::connect_with(&config.connect_options())
            .await
            .map_err(LoaderError::ConnectError)?;
        Ok(MySqlExecutor { conn })
    }

    pub async fn close(self) -> Result<(), LoaderError> {
        self.conn.close().await.map_err(LoaderError::ConnectError)
    }
}

#[async_trait]
impl SqlExecutor for MySqlExecutor {
    async fn execute(&mut self, sql: &str) -> Result<u64, sqlx::Error> {
        // 无参数的 &str 走文本协议，USE 等语句才能执行
        let result = (&mut self.conn).execute(sql).await?;
        Ok(result.rows_affected())
    }
}

/// 只记录语句、不连接数据库的执行器
#[derive(Debug, Default)]
pub struct DryRunExecutor {
    statements: Vec<String>,
}

impl DryRunExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn into_statements(self) -> Vec<String> {
        self.statements
    }
}

#[async_trait]
impl SqlExecutor for DryRunExecutor {
    async fn execute(&mut self, sql: &str) -> Result<u64, sqlx::Error> {
        self.statements.push(sql.to_string());
        Ok(0)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RunOptions {
    /// 跳过仅包含注释的语句
    pub skip_comments: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub executed: usize,
    pub skipped: usize,
    pub rows_affected: u64,
}

/// 按顺序逐条执行语句，遇到第一个失败即停止，已执行的语句不回滚
pub async fn run_statements<E>(
    executor: &mut E,
    statements: &[String],
    options: RunOptions,
) -> Result<RunSummary, LoaderError>
where
    E: SqlExecutor + ?Sized,
{
    let mut summary = RunSummary::default();

    for (i, statement) in statements.iter().enumerate() {
        let index = i + 1;

        if options.skip_comments && is_comment(statement) {
            tracing::debug!(index, "跳过仅包含注释的语句");
            summary.skipped += 1;
            continue;
        }

        tracing::debug!(index, sql = %statement, "执行SQL");
        match executor.execute(statement).await {
            Ok(rows) => {
                summary.executed += 1;
                summary.rows_affected += rows;
            }
            Err(source) => {
                tracing::error!(index, sql = %statement, error = %source, "语句执行失败，停止执行");
                return Err(LoaderError::ExecutionError {
                    index,
                    statement: statement.clone(),
                    source,
                });
            }
        }
    }

    tracing::info!(
        executed = summary.executed,
        skipped = summary.skipped,
        rows_affected = summary.rows_affected,
        "全部语句执行完成"
    );
    Ok(summary)
}
