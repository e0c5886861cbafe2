//! Resume Reviewer
//!
//! 履歴書ファイルを解析APIへアップロードし、スコアとフィードバックを表示するCLI

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod interactive;
pub mod logging;
pub mod picker;
pub mod render;
