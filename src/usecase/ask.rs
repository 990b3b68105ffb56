//! 質問ユースケース
//!
//! ペルソナの指示文とユーザー入力からプロンプトを合成し、クライアントに
//! 1 回だけ送信して応答テキストをそのまま返す。失敗は Error で返し、
//! ここでは panic しない。空の質問は送信前に弾く。

use crate::client;
use crate::domain::{compose_prompt, resolve_persona, Persona, Question};
use crate::error::Error;
use crate::llm::driver::LlmDriver;
use crate::llm::provider::ChatProvider;

/// 失敗時にメッセージへ付ける定型ヒント
const API_KEY_HINT: &str =
    "環境変数 OPENAI_API_KEY が正しく設定されていることを確認してください。";

/// 合成したプロンプトを送信し、応答テキストをそのまま返す
pub fn ask<P: ChatProvider>(
    driver: &LlmDriver<P>,
    persona: Persona,
    question: &Question,
) -> Result<String, Error> {
    let prompt = compose_prompt(persona, question.as_ref());
    driver.complete(&prompt)
}

/// CLI から呼ばれる入口。空の質問を弾き、ペルソナ名を解決してから ask する
pub fn run_ask<P: ChatProvider>(
    driver: &LlmDriver<P>,
    expert: Option<&str>,
    question: &Question,
) -> Result<String, Error> {
    if question.is_blank() {
        return Err(Error::invalid_argument("質問を入力してください。"));
    }
    let persona = resolve_persona(expert)?;
    ask(driver, persona, question)
}

/// プロセス共有クライアントで run_ask する
pub fn answer(expert: Option<&str>, question: &Question) -> Result<String, Error> {
    run_ask(client::shared(), expert, question)
}

/// 失敗時にユーザーへ表示する定型メッセージ（原因 + API キー設定の確認ヒント）
pub fn failure_message(e: &Error) -> String {
    format!("エラーが発生しました: {}\n\n{}", e, API_KEY_HINT)
}
