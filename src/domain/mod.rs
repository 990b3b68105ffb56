//! aiex のドメイン型（型と不変条件）
//!
//! String / PathBuf を直接運ばず、意味のある型に包んで境界を明確にする。

pub mod command;
pub mod persona;
pub mod prompt;
pub mod question;

pub use command::AiexCommand;
pub use persona::{resolve_persona, Persona, ALL_PERSONAS, DEFAULT_PERSONA};
pub use prompt::compose_prompt;
pub use question::Question;

use std::path::{Path, PathBuf};

/// ホームディレクトリのパス（ログの置き場所）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeDir(PathBuf);

impl HomeDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// JSONL ログファイルのパス（`<home>/log/aiex.jsonl`）
    pub fn log_path(&self) -> PathBuf {
        self.0.join("log").join("aiex.jsonl")
    }
}

impl std::ops::Deref for HomeDir {
    type Target = PathBuf;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for HomeDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl From<PathBuf> for HomeDir {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}
