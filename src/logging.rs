//! ログ初期化
//!
//! stderrに出力する。`RUST_LOG` > `--verbose` > 設定ファイルの順に優先

use crate::error::{ReviewerError, Result};
use tracing_subscriber::EnvFilter;

/// 設定ファイルに無いときのレベル
pub const DEFAULT_LEVEL: &str = "info";

pub fn init(verbose: bool, config_level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => config_filter(verbose, config_level)?,
    };
    install(filter)
}

/// 設定のログレベルが不正なら警告して `DEFAULT_LEVEL` で初期化する
pub fn init_or_default(verbose: bool, config_level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => config_filter(verbose, config_level).or_else(|e| {
            eprintln!("⚠ {}; falling back to '{}'", e, DEFAULT_LEVEL);
            config_filter(verbose, DEFAULT_LEVEL)
        })?,
    };
    install(filter)
}

/// `--verbose` なら debug、それ以外は設定値からフィルタを作る
pub fn config_filter(verbose: bool, config_level: &str) -> Result<EnvFilter> {
    let level = if verbose { "debug" } else { config_level };
    EnvFilter::try_new(level)
        .map_err(|e| ReviewerError::Logging(format!("invalid log level '{}': {}", level, e)))
}

fn install(filter: EnvFilter) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| ReviewerError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_filter_levels() {
        assert!(config_filter(false, "warn").is_ok());
        assert!(config_filter(false, "resume_reviewer=debug,info").is_ok());
    }

    #[test]
    fn test_config_filter_rejects_bad_level() {
        let err = config_filter(false, "resume_reviewer=loudest").unwrap_err();
        assert!(matches!(err, ReviewerError::Logging(_)));
        assert!(err.to_string().contains("loudest"));
    }

    #[test]
    fn test_verbose_ignores_config_level() {
        assert!(config_filter(true, "resume_reviewer=loudest").is_ok());
    }
}
