//! Resume Reviewer Common Library
//!
//! CLIとWeb(WASM)で共有されるフォーム状態・型・表示モデル

pub mod types;
pub mod accept;
pub mod error;
pub mod form;
pub mod response;
pub mod view;

pub use types::{AnalysisReport, DetailedScores, KeywordCategories};
pub use accept::{accepts_extension, accepts_mime, ACCEPT_ATTR, ACCEPTED_MIME_TYPES};
pub use error::{Error, Result};
pub use form::{
    AnalysisOutcome, AnalysisState, ReviewForm, SelectedFile, Submission, SubmitRejected, UploadFile,
};
pub use response::{interpret_response, parse_report, DEFAULT_FAILURE_MESSAGE};
pub use view::{format_number, ResultView, ScoreBar, ScoreTier, StatLine, PLACEHOLDER};

/// APIのデフォルトベースURL
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// 解析エンドポイントのパス
pub const ANALYZE_PATH: &str = "/analyze/";

/// multipartのファイルフィールド名
pub const FILE_FIELD: &str = "file";

/// ベースURLから解析エンドポイントURLを組み立てる
///
/// 末尾の `/` は取り除いてから結合する
///
/// # Examples
/// ```
/// use resume_reviewer_common::analyze_url;
///
/// assert_eq!(analyze_url("http://localhost:8000/"), "http://localhost:8000/analyze/");
/// ```
pub fn analyze_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), ANALYZE_PATH)
}
