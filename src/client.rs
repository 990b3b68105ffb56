//! プロセス全体で共有するチャットクライアント
//!
//! 初回アクセス時に固定設定（gpt-4o-mini、温度 0.5）で生成し、以後は同一
//! インスタンスを返す。生成は OnceLock により競合しても 1 回だけ行われる。
//! API キーはリクエスト時に読むため、生成自体は常に成功する。

use crate::llm::driver::LlmDriver;
use crate::llm::openai::OpenAiChatProvider;
use std::sync::OnceLock;

/// 本番用のチャットクライアント
pub type ChatClient = LlmDriver<OpenAiChatProvider>;

static CLIENT: OnceLock<ChatClient> = OnceLock::new();

/// プロセス共有のクライアントを返す。初回呼び出しで生成し、以後は同じ参照を返す
pub fn shared() -> &'static ChatClient {
    CLIENT.get_or_init(|| LlmDriver::new(OpenAiChatProvider::new(None, None, None, None)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::provider::ChatProvider;

    #[test]
    fn test_shared_returns_same_instance() {
        let a = shared();
        let b = shared();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_shared_uses_openai_provider() {
        assert_eq!(shared().provider().name(), "openai");
    }

    #[test]
    fn test_shared_is_single_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| shared() as *const ChatClient as usize))
            .collect();
        let first = shared() as *const ChatClient as usize;
        for h in handles {
            assert_eq!(h.join().unwrap(), first);
        }
    }
}
