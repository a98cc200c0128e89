use clap::Parser;
use sql_loader::cli::Cli;
use sql_loader::logging::init_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let summary = cli
        .run()
        .await
        .map_err(|e| anyhow::anyhow!(e.detailed_message()))?;

    if !cli.dry_run {
        println!(
            "执行完成: {} 条成功, {} 条跳过, 影响 {} 行",
            summary.executed, summary.skipped, summary.rows_affected
        );
    }
    Ok(())
}
