//! 配線: 標準アダプタでアプリを組み立てる

use std::sync::Arc;

use crate::adapter::{FileJsonLog, NoopLog, StdEnvResolver};
use crate::ports::outbound::{EnvResolver, Log};

/// 組み立て済みアプリ
pub struct App {
    pub logger: Arc<dyn Log>,
}

/// 標準アダプタで App を組み立てる。
/// ホームディレクトリが解決できない場合はログなし（NoopLog）で続行する。
pub fn wire() -> App {
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let logger: Arc<dyn Log> = match env_resolver.resolve_home_dir() {
        Ok(home) => Arc::new(FileJsonLog::new(home.log_path())),
        Err(_) => Arc::new(NoopLog),
    };
    App { logger }
}
