//! チャット完了プロバイダの抽象
//!
//! 会話履歴やストリーミングは扱わず、合成済みプロンプト 1 件を送って
//! 全文応答を受け取る最小の契約に絞る。

use crate::error::Error;
use serde_json::Value;

/// チャット完了プロバイダ（Outbound）
pub trait ChatProvider {
    /// プロバイダ名（ログ・エラー表示用）
    fn name(&self) -> &str;

    /// 送信する JSON ペイロードを生成する
    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error>;

    /// HTTP リクエストを実行し、応答本文（JSON 文字列）を返す
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// 応答 JSON からテキストを抽出する（テキストが無い場合は None）
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}
