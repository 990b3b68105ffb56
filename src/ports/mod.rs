//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: アプリが外界（環境変数・ログ）を使うための trait

pub mod inbound;
pub mod outbound;
