//! 解析結果の型定義
//!
//! `POST /analyze/` が返すJSONをそのまま保持する型:
//! - AnalysisReport: 成功時のペイロード（score / feedback が必須）
//! - DetailedScores: スコア内訳
//! - KeywordCategories: カテゴリ別キーワード
//!
//! 任意項目は型が合わなければ未設定として扱い、そのセクションを省略する。

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// 解析結果ペイロード
///
/// 必須は `score` と `feedback` のみ。未知のフィールドは `extra` に保持する
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// 総合スコア (0-100)
    pub score: f64,

    pub feedback: String,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub detailed_scores: Option<DetailedScores>,

    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u64>,

    #[serde(default, deserialize_with = "lenient_keywords", skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub keywords_found: Option<u64>,

    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub total_keywords: Option<u64>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub keyword_categories: Option<KeywordCategories>,

    /// サーバーが返したその他のフィールド
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// スコア内訳（各 0-100）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailedScores {
    #[serde(default)]
    pub completeness: f64,
    #[serde(default)]
    pub keyword_score: f64,
    #[serde(default)]
    pub length_score: f64,
}

/// カテゴリ別キーワード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordCategories {
    #[serde(default, deserialize_with = "lenient_list")]
    pub generic: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub technical: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub business: Vec<String>,
}

impl KeywordCategories {
    /// 表示名付きで空でないカテゴリを列挙
    pub fn non_empty(&self) -> Vec<(&'static str, &[String])> {
        [
            ("General", self.generic.as_slice()),
            ("Technical", self.technical.as_slice()),
            ("Business", self.business.as_slice()),
        ]
        .into_iter()
        .filter(|(_, words)| !words.is_empty())
        .collect()
    }
}

/// null や型違いは None
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// 件数。`412.0` のような整数値の小数も受け付ける
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && *f >= 0.0)
                .map(|f| f as u64)
        }),
        _ => None,
    };
    Ok(count)
}

fn lenient_keywords<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string_list(Value::deserialize(deserializer)?))
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string_list(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// 配列なら文字列要素だけを残す
fn string_list(value: Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    }
}
