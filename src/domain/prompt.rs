//! 送信プロンプトの合成（ペルソナ指示文 + ユーザーの質問）

use crate::domain::persona::Persona;

/// 指示文と質問の間に挟む固定の区切り・ラベル
const QUESTION_LABEL: &str = "\n\nユーザーの質問: ";

/// ペルソナの指示文とユーザー入力から送信プロンプトを合成する。
/// 入力はそのまま連結し、エスケープや長さ制限は行わない。
pub fn compose_prompt(persona: Persona, user_input: &str) -> String {
    format!("{}{}{}", persona.instruction(), QUESTION_LABEL, user_input)
}
