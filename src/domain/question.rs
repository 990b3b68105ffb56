//! ユーザーの質問のドメイン型（LLM に送る自由記述テキスト）

/// ユーザーの質問。入力は加工せずそのまま保持する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// 前後の空白を除くと空かどうか。空の質問は送信前に弾く
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::ops::Deref for Question {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Question {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank_empty() {
        assert!(Question::new("").is_blank());
    }

    #[test]
    fn test_is_blank_whitespace_only() {
        assert!(Question::new("   ").is_blank());
        assert!(Question::new("\n\t").is_blank());
        // 全角スペースも空白として扱う
        assert!(Question::new("　　").is_blank());
    }

    #[test]
    fn test_is_blank_false_for_text() {
        assert!(!Question::new("Pythonでリストを逆順にする方法").is_blank());
        assert!(!Question::new("  x  ").is_blank());
    }

    #[test]
    fn test_question_keeps_raw_text() {
        let q = Question::new("  前後の空白は保持される  ");
        assert_eq!(q.as_ref(), "  前後の空白は保持される  ");
    }
}
