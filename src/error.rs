//! aiex 共通のエラー型
//!
//! 全レイヤー（CLI / usecase / adapter）はこの Error を返し、panic しない。
//! 終了コードは sysexits に合わせる（64: usage, 74: I/O・通信, 78: 設定）。

use thiserror::Error;

/// aiex 全体で使うエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// コマンドラインの誤用（未知のオプション・未知のペルソナ・空の質問）
    #[error("{0}")]
    InvalidArgument(String),
    /// 設定エラー（API キーの環境変数が未設定など）
    #[error("{0}")]
    Env(String),
    /// HTTP 通信エラー（接続失敗・非 2xx 応答・応答テキストなし）
    #[error("{0}")]
    Http(String),
    /// JSON の生成・解析エラー
    #[error("{0}")]
    Json(String),
    /// ローカル I/O エラー（ログファイルなど）
    #[error("{0}")]
    Io(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// 使い方の誤り（usage エラー）かどうか。main が usage 表示の要否を判断する
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// プロセス終了コード（sysexits）
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Env(_) => 78,
            Self::Http(_) | Self::Json(_) | Self::Io(_) => 74,
        }
    }
}
