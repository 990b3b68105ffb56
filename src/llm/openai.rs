//! OpenAI Chat Completions (/chat/completions) プロバイダ
//!
//! base_url で互換エンドポイントも指定可能。API キーは構築時ではなく
//! リクエスト時に環境変数から読むため、キー未設定でも構築は成功し、
//! 最初の送信が設定エラーになる。

use crate::error::Error;
use crate::llm::provider::ChatProvider;
use serde_json::{json, Value};
use std::env;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
const DEFAULT_TEMPERATURE: f64 = 0.5;

/// OpenAI Chat Completions プロバイダ
pub struct OpenAiChatProvider {
    model: String,
    base_url: String,
    api_key_env: String,
    temperature: f64,
}

impl OpenAiChatProvider {
    /// 新しいプロバイダを作成
    ///
    /// * `model` - モデル名（None のとき "gpt-4o-mini"）
    /// * `base_url` - ベース URL（None のとき DEFAULT_BASE_URL）
    /// * `api_key_env` - API キーを読む環境変数名（None のとき "OPENAI_API_KEY"）
    /// * `temperature` - 温度（None のとき 0.5）
    pub fn new(
        model: Option<String>,
        base_url: Option<String>,
        api_key_env: Option<String>,
        temperature: Option<f64>,
    ) -> Self {
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let api_key_env = api_key_env.unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string());
        let temperature = temperature.unwrap_or(DEFAULT_TEMPERATURE);
        Self {
            model,
            base_url,
            api_key_env,
            temperature,
        }
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// API キーをリクエスト時に読む。未設定・空のときは設定エラー
    fn auth_header(&self) -> Result<String, Error> {
        match env::var(&self.api_key_env) {
            Ok(key) if !key.is_empty() => Ok(format!("Bearer {}", key)),
            _ => Err(Error::env(format!(
                "{} environment variable is not set",
                self.api_key_env
            ))),
        }
    }
}

/// 非 2xx 応答の本文からエラーメッセージを取り出す。
/// JSON に error.message があればそれを、無ければステータスと本文をそのまま返す。
fn error_message_from_body(status: reqwest::StatusCode, response_text: &str) -> String {
    if let Ok(v) = serde_json::from_str::<Value>(response_text) {
        v["error"]["message"]
            .as_str()
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text))
    } else {
        format!("HTTP {}: {}", status, response_text)
    }
}

impl ChatProvider for OpenAiChatProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
        Ok(json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": self.temperature,
            "stream": false
        }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let auth = self.auth_header()?;
        let response = reqwest::blocking::Client::new()
            .post(self.url())
            .header("Content-Type", "application/json")
            .header("Authorization", auth)
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::http(format!(
                "Chat completions error: {}",
                error_message_from_body(status, &response_text)
            )));
        }

        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(err) = v.get("error") {
            let msg = err["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("API error: {}", msg)));
        }

        let text = v["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string());
        Ok(text)
    }
}
