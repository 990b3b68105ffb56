//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリ（ログの置き場所）を環境変数から解決する。
//! API キーはプロバイダがリクエスト時に直接読むため、ここでは扱わない。

use crate::domain::HomeDir;
use crate::error::Error;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. AIEX_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/aiex（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/aiex
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;
}
