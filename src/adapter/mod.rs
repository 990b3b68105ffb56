//! 標準アダプタ実装（ファイルログ・環境変数解決）

pub mod file_json_log;
pub mod std_env_resolver;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use std_env_resolver::StdEnvResolver;
