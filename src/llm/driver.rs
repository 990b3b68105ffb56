//! LLM ドライバーの実装
//!
//! プロバイダに依存しない共通の送信処理（ペイロード生成 → HTTP → テキスト抽出）。

use crate::error::Error;
use crate::llm::provider::ChatProvider;

/// LLM ドライバー
pub struct LlmDriver<P: ChatProvider> {
    provider: P,
}

impl<P: ChatProvider> LlmDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// プロンプトを送信して応答テキストを取得する
    ///
    /// # Returns
    /// * `Ok(String)` - 応答テキスト（加工なし）
    /// * `Err(Error)` - 生成・通信・解析いずれかの失敗
    pub fn complete(&self, prompt: &str) -> Result<String, Error> {
        let payload = self.provider.make_request_payload(prompt)?;
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;
        let response_json = self.provider.make_http_request(&request_json)?;
        let text = self
            .provider
            .parse_response_text(&response_json)?
            .ok_or_else(|| Error::http("No text in response"))?;
        Ok(text)
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }
}
