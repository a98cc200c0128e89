use clap::Parser;
use std::path::PathBuf;
use crate::core::config::{DbConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_USER};
use crate::core::error::LoaderError;
use crate::core::executor::{run_statements, DryRunExecutor, MySqlExecutor, RunOptions, RunSummary};
use crate::core::loader::load_file;

/// 逐条执行 SQL 文件中的语句
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// 要执行的 SQL 文件
    pub file: PathBuf,

    #[arg(short, long, env = "DB_USER", default_value = DEFAULT_USER)]
    pub user: String,

    #[arg(short, long, env = "DB_PASSWORD", default_value = "", hide_env_values = true)]
    pub password: String,

    #[arg(long, env = "DB_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(short = 'P', long, env = "DB_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(short = 'D', long, env = "DB_NAME")]
    pub database: Option<String>,

    /// 只打印拆分后的语句，不连接数据库
    #[arg(long)]
    pub dry_run: bool,

    /// 以 JSON 数组输出语句 (配合 --dry-run)
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// 跳过仅包含注释的语句
    #[arg(long)]
    pub skip_comments: bool,

    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn db_config(&self) -> DbConfig {
        DbConfig {
            user: self.user.clone(),
            password: self.password.clone(),
            host: self.host.clone(),
            port: self.port,
            database: self.database.clone(),
        }
    }

    pub async fn run(&self) -> Result<RunSummary, LoaderError> {
        tracing::info!(file = %self.file.display(), "开始加载 SQL 文件");
        let statements = load_file(&self.file)?;
        let options = RunOptions {
            skip_comments: self.skip_comments,
        };

        if self.dry_run {
            let mut executor = DryRunExecutor::new();
            let summary = run_statements(&mut executor, &statements, options).await?;
            print!("{}", render_statements(executor.statements(), self.json)?);
            return Ok(summary);
        }

        let config = self.db_config();
        let config_json = serde_json::to_string(&config)?;
        tracing::debug!(config = %config_json, "连接参数");

        let mut executor = MySqlExecutor::connect(&config).await?;
        let result = run_statements(&mut executor, &statements, options).await;
        if let Err(e) = executor.close().await {
            tracing::warn!(error = %e, "关闭连接失败");
        }
        result
    }
}

/// 把语句格式化为编号列表或 JSON 数组
pub fn render_statements(statements: &[String], json: bool) -> Result<String, LoaderError> {
    if json {
        let mut output = serde_json::to_string_pretty(statements)?;
        output.push('\n');
        return Ok(output);
    }

    let mut output = String::new();
    for (i, statement) in statements.iter().enumerate() {
        output.push_str(&format!("{:>4}: {}\n", i + 1, statement));
    }
    Ok(output)
}
