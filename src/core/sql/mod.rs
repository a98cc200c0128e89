mod splitter;

pub use splitter::{feed, is_comment, split_script, StatementSplitter, COMMENT_MARKER, TERMINATOR};
