pub mod cli;
pub mod core;
pub mod logging;

pub use crate::core::config::DbConfig;
pub use crate::core::error::LoaderError;
pub use crate::core::executor::{run_statements, DryRunExecutor, MySqlExecutor, RunOptions, RunSummary, SqlExecutor};
pub use crate::core::loader::{load_file, read_statements};
pub use crate::core::sql::{feed, split_script, StatementSplitter};
