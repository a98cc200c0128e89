use std::io::Write;
use clap::Parser;
use sql_loader::cli::Cli;
use sql_loader::{load_file, run_statements, DryRunExecutor, LoaderError, RunOptions};
use tempfile::NamedTempFile;

const INIT_SQL: &str = r#"
-- 初始化数据库
CREATE DATABASE IF NOT EXISTS test;
USE test;

CREATE TABLE IF NOT EXISTS users (
    id BIGINT NOT NULL AUTO_RANDOM PRIMARY KEY,
    name VARCHAR(64) NOT NULL
);
INSERT INTO users (name) VALUES ('John Doe'); INSERT INTO users (name) VALUES ('Jane Doe');
"#;

fn write_sql(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_file_splits_statements() {
    let file = write_sql(INIT_SQL);
    let statements = load_file(file.path()).unwrap();

    assert_eq!(
        statements,
        vec![
            "-- 初始化数据库",
            "CREATE DATABASE IF NOT EXISTS test;",
            "USE test;",
            "CREATE TABLE IF NOT EXISTS users ( id BIGINT NOT NULL AUTO_RANDOM PRIMARY KEY, name VARCHAR(64) NOT NULL );",
            "INSERT INTO users (name) VALUES ('John Doe');",
            "INSERT INTO users (name) VALUES ('Jane Doe');",
        ]
    );
}

#[test]
fn test_load_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_file(dir.path().join("absent.sql")).unwrap_err();
    assert!(matches!(err, LoaderError::IoError { .. }));
}

#[tokio::test]
async fn test_statements_executed_in_file_order() {
    let file = write_sql(INIT_SQL);
    let statements = load_file(file.path()).unwrap();

    let mut executor = DryRunExecutor::new();
    let options = RunOptions { skip_comments: true };
    let summary = run_statements(&mut executor, &statements, options).await.unwrap();

    assert_eq!(summary.executed, 5);
    assert_eq!(summary.skipped, 1);
    assert_eq!(executor.into_statements(), statements[1..].to_vec());
}

#[tokio::test]
async fn test_cli_dry_run() {
    let file = write_sql(INIT_SQL);
    let path = file.path().to_str().unwrap();

    let cli = Cli::try_parse_from(["sql_loader", path, "--dry-run"]).unwrap();
    let summary = cli.run().await.unwrap();
    assert_eq!(summary.executed, 6);
    assert_eq!(summary.rows_affected, 0);
}

#[tokio::test]
async fn test_cli_missing_file() {
    let cli = Cli::try_parse_from(["sql_loader", "no/such/file.sql", "--dry-run"]).unwrap();
    let err = cli.run().await.unwrap_err();
    assert_eq!(err.brief_message(), "Error: IO error");
}
