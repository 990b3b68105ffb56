//! aiex - AI 専門家チャット CLI
//!
//! 固定 4 種のペルソナ（専門家）の指示文とユーザーの質問を合成し、
//! OpenAI Chat Completions へ 1 回送信して応答を表示する。

/// 標準アダプタ実装
pub mod adapter;

/// CLI 引数解析
pub mod cli;

/// プロセス共有のチャットクライアント
pub mod client;

/// ドメイン型（ペルソナ・質問・プロンプト）
pub mod domain;

/// エラーハンドリング
pub mod error;

/// LLM ドライバーとプロバイダ
pub mod llm;

/// ポート定義（inbound / outbound）
pub mod ports;

/// ユースケース
pub mod usecase;

/// 配線
pub mod wiring;
