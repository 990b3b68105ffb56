//! CLI コマンドのドメイン表現

use crate::domain::Question;

/// 実行するコマンド
#[derive(Debug, Clone, PartialEq)]
pub enum AiexCommand {
    Help,
    ListPersonas,
    /// 質問を送信する。expert はペルソナ名（None はデフォルト）
    Ask {
        expert: Option<String>,
        question: Question,
    },
}
