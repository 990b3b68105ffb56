//! ユースケース層

pub mod ask;

pub use ask::{answer, ask, failure_message, run_ask};
