//! 解析結果の表示モデル
//!
//! CLIとWebの両方が同じ `ResultView` を描画する。
//! 任意項目が無いセクションは省略する。

use crate::types::AnalysisReport;

/// 値が無いときの表示
pub const PLACEHOLDER: &str = "N/A";

/// スコア帯（80 / 60 で区切る）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreTier::High
        } else if score >= 60.0 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ScoreTier::High => "🎉",
            ScoreTier::Medium => "👍",
            ScoreTier::Low => "📈",
        }
    }

    /// CSSカラー
    pub fn color(&self) -> &'static str {
        match self {
            ScoreTier::High => "#28a745",
            ScoreTier::Medium => "#ffc107",
            ScoreTier::Low => "#dc3545",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreTier::High => "high",
            ScoreTier::Medium => "medium",
            ScoreTier::Low => "low",
        }
    }
}

/// 内訳バー1本分
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBar {
    pub label: &'static str,
    pub value: f64,
}

impl ScoreBar {
    /// バー幅（0-100に丸める）
    pub fn width_percent(&self) -> f64 {
        self.value.clamp(0.0, 100.0)
    }
}

/// 統計行
#[derive(Debug, Clone, PartialEq)]
pub struct StatLine {
    pub label: &'static str,
    pub value: String,
}

/// 解析結果パネルの表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub score: f64,
    pub tier: ScoreTier,
    pub feedback: String,
    pub breakdown: Option<Vec<ScoreBar>>,
    pub stats: Vec<StatLine>,
    pub categories: Vec<(&'static str, Vec<String>)>,
}

impl ResultView {
    pub fn from_report(report: &AnalysisReport) -> Self {
        let breakdown = report.detailed_scores.map(|scores| {
            vec![
                ScoreBar { label: "Completeness", value: scores.completeness },
                ScoreBar { label: "Keyword Match", value: scores.keyword_score },
                ScoreBar { label: "Length Score", value: scores.length_score },
            ]
        });

        let categories = report
            .keyword_categories
            .as_ref()
            .map(|c| {
                c.non_empty()
                    .into_iter()
                    .map(|(label, words)| (label, words.to_vec()))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            score: report.score,
            tier: ScoreTier::from_score(report.score),
            feedback: report.feedback.clone(),
            breakdown,
            stats: stat_lines(report),
            categories,
        }
    }

    /// "87/100" 形式
    pub fn score_text(&self) -> String {
        format!("{}/100", format_number(self.score))
    }
}

/// 統計行を組み立てる
///
/// 0 は未設定と同じ扱い。`keywords` が無くてもプレースホルダで表示する
fn stat_lines(report: &AnalysisReport) -> Vec<StatLine> {
    let non_zero = |v: Option<u64>| v.filter(|n| *n > 0);

    let word_count = non_zero(report.word_count)
        .map(|n| n.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let found = non_zero(report.keywords_found)
        .or_else(|| report.keywords.as_ref().map(|k| k.len() as u64))
        .map(|n| n.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    let total = non_zero(report.total_keywords)
        .map(|n| n.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let keywords = match report.keywords.as_deref() {
        Some(list) if !list.is_empty() => list.join(", "),
        _ => "None".to_string(),
    };

    vec![
        StatLine { label: "Word Count", value: word_count },
        StatLine { label: "Keywords Found", value: format!("{}/{}", found, total) },
        StatLine { label: "Keywords", value: keywords },
    ]
}

/// 整数なら小数点なしで表示
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DetailedScores, KeywordCategories};

    fn report(score: f64, feedback: &str) -> AnalysisReport {
        AnalysisReport {
            score,
            feedback: feedback.to_string(),
            ..Default::default()
        }
    }

    fn stat<'a>(view: &'a ResultView, label: &str) -> &'a str {
        view.stats
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.value.as_str())
            .expect("統計行がない")
    }

    #[test]
    fn test_score_tiers() {
        assert_eq!(ScoreTier::from_score(100.0), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(80.0), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(79.9), ScoreTier::Medium);
        assert_eq!(ScoreTier::from_score(60.0), ScoreTier::Medium);
        assert_eq!(ScoreTier::from_score(59.9), ScoreTier::Low);
        assert_eq!(ScoreTier::from_score(0.0), ScoreTier::Low);
    }

    #[test]
    fn test_high_score_view() {
        let mut r = report(87.0, "Great resume");
        r.keywords = Some(vec!["Python".into(), "SQL".into()]);

        let view = ResultView::from_report(&r);
        assert_eq!(view.score_text(), "87/100");
        assert_eq!(view.tier.emoji(), "🎉");
        assert_eq!(stat(&view, "Keywords"), "Python, SQL");
        assert_eq!(stat(&view, "Keywords Found"), "2/N/A");
    }

    #[test]
    fn test_low_score_view() {
        let mut r = report(45.0, "Needs work");
        r.keywords = Some(vec![]);

        let view = ResultView::from_report(&r);
        assert_eq!(view.tier, ScoreTier::Low);
        assert_eq!(view.tier.emoji(), "📈");
        assert_eq!(stat(&view, "Keywords Found"), "0/N/A");
        assert_eq!(stat(&view, "Keywords"), "None");
    }

    #[test]
    fn test_missing_keywords_uses_placeholder() {
        let view = ResultView::from_report(&report(70.0, "ok"));

        assert_eq!(stat(&view, "Word Count"), "N/A");
        assert_eq!(stat(&view, "Keywords Found"), "N/A/N/A");
        assert_eq!(stat(&view, "Keywords"), "None");
        assert!(view.breakdown.is_none());
        assert!(view.categories.is_empty());
    }

    #[test]
    fn test_counts_prefer_server_values() {
        let mut r = report(72.3, "ok");
        r.keywords = Some(vec!["Git".into()]);
        r.keywords_found = Some(3);
        r.total_keywords = Some(12);
        r.word_count = Some(512);

        let view = ResultView::from_report(&r);
        assert_eq!(view.score_text(), "72.3/100");
        assert_eq!(stat(&view, "Word Count"), "512");
        assert_eq!(stat(&view, "Keywords Found"), "3/12");
    }

    #[test]
    fn test_breakdown_and_categories() {
        let mut r = report(66.0, "ok");
        r.detailed_scores = Some(DetailedScores {
            completeness: 80.0,
            keyword_score: 120.0,
            length_score: 60.0,
        });
        r.keyword_categories = Some(KeywordCategories {
            generic: vec![],
            technical: vec!["Python".into()],
            business: vec!["ROI".into()],
        });

        let view = ResultView::from_report(&r);
        let bars = view.breakdown.expect("内訳がない");
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[1].label, "Keyword Match");
        assert_eq!(bars[1].width_percent(), 100.0);

        assert_eq!(view.categories.len(), 2);
        assert_eq!(view.categories[0], ("Technical", vec!["Python".to_string()]));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(87.0), "87");
        assert_eq!(format_number(72.34), "72.3");
        assert_eq!(format_number(0.0), "0");
    }
}
