//! APIレスポンスの解釈
//!
//! ステータスコードとボディから `AnalysisState` を決める:
//! 1. 2xx以外: ボディの `error` またはステータスコード入りのメッセージ
//! 2. 2xxで `error` フィールドあり: アプリケーションエラー
//! 3. それ以外: ボディ全体を成功ペイロードとして保持

use serde_json::Value;

use crate::error::{Error, Result};
use crate::form::AnalysisState;
use crate::types::AnalysisReport;

/// エラーメッセージが得られなかった場合の表示
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to analyze resume. Please try again.";

/// HTTPレスポンスを解析結果の状態に変換
///
/// # Arguments
/// * `status` - HTTPステータスコード
/// * `body` - レスポンスボディ（JSONを想定）
///
/// # Examples
/// ```
/// use resume_reviewer_common::{interpret_response, AnalysisState};
///
/// let state = interpret_response(500, "<html>oops</html>");
/// assert_eq!(state, AnalysisState::Error("Server error: 500".into()));
/// ```
pub fn interpret_response(status: u16, body: &str) -> AnalysisState {
    if !(200..300).contains(&status) {
        // パースできないボディは空オブジェクト扱い
        let data = serde_json::from_str::<Value>(body).unwrap_or_else(|_| Value::Object(Default::default()));
        let message = error_field(&data).unwrap_or_else(|| format!("Server error: {}", status));
        return AnalysisState::Error(message);
    }

    let data = match serde_json::from_str::<Value>(body) {
        Ok(data) => data,
        Err(e) => return AnalysisState::Error(format!("Invalid JSON response: {}", e)),
    };

    if let Some(message) = error_field(&data) {
        return AnalysisState::Error(message);
    }

    match parse_report(data) {
        Ok(report) => AnalysisState::Success(report),
        Err(e) => AnalysisState::Error(e.to_string()),
    }
}

/// JSON値を `AnalysisReport` に変換
pub fn parse_report(data: Value) -> Result<AnalysisReport> {
    if !data.is_object() {
        return Err(Error::Parse("analysis response is not a JSON object".into()));
    }
    Ok(serde_json::from_value(data)?)
}

/// `error` フィールドを取り出す
///
/// 空文字・null・false・0 はエラーなしとみなす
fn error_field(data: &Value) -> Option<String> {
    match data.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response() {
        let state = interpret_response(200, r#"{"score": 87, "feedback": "Great resume", "keywords": ["Python", "SQL"]}"#);

        let report = state.report().expect("Successではない");
        assert_eq!(report.score, 87.0);
        assert_eq!(report.feedback, "Great resume");
    }

    #[test]
    fn test_server_error_with_error_field() {
        let state = interpret_response(500, r#"{"error": "parse failure"}"#);
        assert_eq!(state, AnalysisState::Error("parse failure".into()));
    }

    #[test]
    fn test_server_error_unparsable_body() {
        let state = interpret_response(500, "Internal Server Error");
        assert_eq!(state, AnalysisState::Error("Server error: 500".into()));
    }

    #[test]
    fn test_server_error_without_error_field() {
        let state = interpret_response(422, r#"{"detail": [{"msg": "field required"}]}"#);
        assert_eq!(state, AnalysisState::Error("Server error: 422".into()));
    }

    #[test]
    fn test_ok_status_with_error_field() {
        let state = interpret_response(200, r#"{"error": "unsupported file type"}"#);
        assert_eq!(state, AnalysisState::Error("unsupported file type".into()));
    }

    #[test]
    fn test_ok_status_with_empty_error_field_is_success() {
        let state = interpret_response(200, r#"{"error": "", "score": 61, "feedback": "ok"}"#);
        assert!(state.report().is_some());
    }

    #[test]
    fn test_ok_status_invalid_json() {
        let state = interpret_response(200, "not json");
        let message = state.error_message().expect("Errorではない");
        assert!(message.starts_with("Invalid JSON response"));
    }

    #[test]
    fn test_ok_status_missing_required_field() {
        let state = interpret_response(200, r#"{"feedback": "no score"}"#);
        let message = state.error_message().expect("Errorではない");
        assert!(message.contains("score"));
    }

    #[test]
    fn test_ok_status_integral_float_word_count() {
        let state = interpret_response(200, r#"{"score": 80, "feedback": "x", "word_count": 412.0}"#);
        let report = state.report().expect("Successではない");
        assert_eq!(report.word_count, Some(412));
    }

    #[test]
    fn test_ok_status_null_detailed_score_omits_breakdown() {
        let body = r#"{"score": 80, "feedback": "x",
            "detailed_scores": {"completeness": null, "keyword_score": 40, "length_score": 60}}"#;
        let state = interpret_response(200, body);

        let report = state.report().expect("Successではない");
        assert_eq!(report.score, 80.0);
        assert!(report.detailed_scores.is_none());
    }

    #[test]
    fn test_ok_status_null_keyword_category() {
        let body = r#"{"score": 80, "feedback": "x",
            "keyword_categories": {"generic": null, "technical": ["Rust"]}}"#;
        let state = interpret_response(200, body);

        let categories = state
            .report()
            .and_then(|r| r.keyword_categories.as_ref())
            .expect("カテゴリがない");
        assert!(categories.generic.is_empty());
        assert_eq!(categories.technical, vec!["Rust"]);
    }

    #[test]
    fn test_ok_status_ill_typed_score_is_error() {
        let state = interpret_response(200, r#"{"score": "high", "feedback": "x"}"#);
        assert!(state.error_message().is_some());
    }

    #[test]
    fn test_parse_report_rejects_array() {
        let err = parse_report(serde_json::json!([1, 2])).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_error_field_non_string() {
        let state = interpret_response(400, r#"{"error": {"code": 7}}"#);
        assert_eq!(state, AnalysisState::Error(r#"{"code":7}"#.into()));
    }
}
