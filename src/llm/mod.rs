//! LLM ドライバーとプロバイダ
//!
//! リクエスト生成・HTTP 実行・応答解析をプロバイダの trait に分け、
//! 共通の送信処理を LlmDriver が担う。

pub mod driver;
pub mod openai;
pub mod provider;

pub use driver::LlmDriver;
pub use openai::OpenAiChatProvider;
pub use provider::ChatProvider;
