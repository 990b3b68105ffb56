//! CLI 引数解析（inbound アダプタ）

pub mod args;

pub use args::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
