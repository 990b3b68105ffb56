//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::HomeDir;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        if let Ok(home) = env::var("AIEX_HOME") {
            if !home.is_empty() {
                return Ok(HomeDir::new(PathBuf::from(home)));
            }
        }

        let config_base = env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .filter(|s| !s.is_empty())
                    .map(|h| PathBuf::from(h).join(".config"))
            })
            .ok_or_else(|| Error::env("HOME is not set"))?;

        let mut path = config_base;
        path.push("aiex");
        Ok(HomeDir::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 環境変数を書き換えるため、優先順位の検証は 1 テストにまとめて順に行う
    #[test]
    fn test_resolve_home_dir_precedence() {
        let resolver = StdEnvResolver;
        let saved_aiex = env::var("AIEX_HOME").ok();
        let saved_xdg = env::var("XDG_CONFIG_HOME").ok();
        let saved_home = env::var("HOME").ok();

        env::set_var("AIEX_HOME", "/tmp/aiex-test-home");
        env::set_var("XDG_CONFIG_HOME", "/tmp/xdg");
        env::set_var("HOME", "/tmp/user");
        let home = resolver.resolve_home_dir().unwrap();
        assert_eq!(home.as_path(), std::path::Path::new("/tmp/aiex-test-home"));

        env::remove_var("AIEX_HOME");
        let home = resolver.resolve_home_dir().unwrap();
        assert_eq!(home.as_path(), std::path::Path::new("/tmp/xdg/aiex"));

        env::remove_var("XDG_CONFIG_HOME");
        let home = resolver.resolve_home_dir().unwrap();
        assert_eq!(home.as_path(), std::path::Path::new("/tmp/user/.config/aiex"));

        env::remove_var("HOME");
        let e = resolver.resolve_home_dir().unwrap_err();
        assert!(matches!(e, Error::Env(_)));

        // 退避した値を戻す
        match saved_aiex {
            Some(v) => env::set_var("AIEX_HOME", v),
            None => env::remove_var("AIEX_HOME"),
        }
        match saved_xdg {
            Some(v) => env::set_var("XDG_CONFIG_HOME", v),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }
        match saved_home {
            Some(v) => env::set_var("HOME", v),
            None => env::remove_var("HOME"),
        }
    }
}
