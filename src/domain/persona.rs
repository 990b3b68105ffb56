//! 専門家ペルソナのドメイン型
//!
//! 固定 4 種のペルソナと、それぞれのシステム指示文・表示ラベル・説明文を持つ。
//! 未知のペルソナは列挙型では表現できないため、文字列からの解決は
//! `resolve_persona` 経由でのみ行い、不明な名前は usage エラーにする。

use crate::error::Error;

/// 専門家ペルソナ（固定 4 種）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Persona {
    Medical,
    Programming,
    Business,
    Education,
}

/// 画面の並び順どおりの全ペルソナ
pub const ALL_PERSONAS: [Persona; 4] = [
    Persona::Medical,
    Persona::Programming,
    Persona::Business,
    Persona::Education,
];

/// 指定省略時に選択されるペルソナ
pub const DEFAULT_PERSONA: Persona = Persona::Programming;

impl Persona {
    /// CLI・ログで使う識別子
    pub fn as_str(self) -> &'static str {
        match self {
            Persona::Medical => "medical",
            Persona::Programming => "programming",
            Persona::Business => "business",
            Persona::Education => "education",
        }
    }

    /// 表示ラベル（日本語）
    pub fn label(self) -> &'static str {
        match self {
            Persona::Medical => "医療専門家",
            Persona::Programming => "プログラミング専門家",
            Persona::Business => "ビジネスコンサルタント",
            Persona::Education => "教育アドバイザー",
        }
    }

    /// システム指示文。全ペルソナで非空
    pub fn instruction(self) -> &'static str {
        match self {
            Persona::Medical => {
                "あなたは経験豊富な医療専門家です。医学的な知識を持ち、健康や医療に関する質問に対して、専門的かつ分かりやすく回答してください。ただし、診断や治療の推奨は行わず、一般的な情報提供に留めてください。"
            }
            Persona::Programming => {
                "あなたは熟練したプログラミング専門家です。様々なプログラミング言語やフレームワークに精通しており、コードの書き方、デバッグ、ベストプラクティスについて詳しく説明できます。具体的なコード例を交えて回答してください。"
            }
            Persona::Business => {
                "あなたは経験豊富なビジネスコンサルタントです。経営戦略、マーケティング、組織運営などのビジネス課題に対して、実践的なアドバイスと具体的なソリューションを提供してください。"
            }
            Persona::Education => {
                "あなたは教育分野の専門家です。学習方法、教育理論、キャリア開発について深い知識を持ち、学習者の成長をサポートする具体的なアドバイスを提供してください。"
            }
        }
    }

    /// 一覧表示用の説明文
    pub fn description(self) -> &'static str {
        match self {
            Persona::Medical => "健康や医療に関する一般的な情報を提供します",
            Persona::Programming => "コードやプログラミングの技術的な質問に回答します",
            Persona::Business => "ビジネス戦略や経営に関するアドバイスを提供します",
            Persona::Education => "学習方法や教育に関するサポートを提供します",
        }
    }

    /// 識別子（大文字小文字を無視）または日本語ラベルから解決する
    pub fn from_str(s: &str) -> Option<Persona> {
        let lower = s.to_ascii_lowercase();
        ALL_PERSONAS
            .into_iter()
            .find(|p| lower == p.as_str() || s == p.label())
    }
}

/// 要求されたペルソナ名（None はデフォルト）を解決する。
/// 不明な名前の場合は Error::invalid_argument（is_usage == true）で利用可能一覧を返す。
pub fn resolve_persona(requested: Option<&str>) -> Result<Persona, Error> {
    let name = match requested {
        None => return Ok(DEFAULT_PERSONA),
        Some(s) => s,
    };
    Persona::from_str(name).ok_or_else(|| {
        let available: Vec<&str> = ALL_PERSONAS.iter().map(|p| p.as_str()).collect();
        Error::invalid_argument(format!(
            "Unknown expert: '{}'. Available: {}",
            name,
            available.join(", ")
        ))
    })
}
