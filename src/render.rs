//! ターミナル描画
//!
//! フォーム状態を文字列に変換する。副作用は `spinner` のみ

use indicatif::{ProgressBar, ProgressStyle};
use resume_reviewer_common::{
    format_number, AnalysisState, ResultView, ScoreBar, SelectedFile, UploadFile,
};
use std::time::Duration;

const BAR_CELLS: usize = 20;

/// フォーム全体を描画
pub fn render_state(file: Option<&SelectedFile>, state: &AnalysisState) -> String {
    let mut out = String::new();

    if let Some(file) = file {
        out.push_str(&format!(
            "Selected File: {} ({})\n",
            file.file_name(),
            format_size(file.size())
        ));
    }

    match state {
        AnalysisState::Idle => {}
        AnalysisState::Loading => {
            out.push_str("\nAnalyzing Resume...\n");
            out.push_str("Please wait while we analyze your resume...\n");
        }
        AnalysisState::Error(message) => {
            out.push_str("\n❌ Error\n");
            out.push_str(message);
            out.push('\n');
        }
        AnalysisState::Success(report) => {
            out.push('\n');
            out.push_str(&render_result(&ResultView::from_report(report)));
        }
    }

    out
}

/// 解析結果パネルを描画
pub fn render_result(view: &ResultView) -> String {
    let mut lines = vec![
        "Resume Analysis".to_string(),
        format!("{} Overall Score: {}", view.tier.emoji(), view.score_text()),
        format!("Feedback: {}", view.feedback),
    ];

    if let Some(bars) = &view.breakdown {
        lines.push(String::new());
        lines.push("Detailed Breakdown:".to_string());
        for bar in bars {
            lines.push(format!("  {}", render_bar(bar)));
        }
    }

    lines.push(String::new());
    for stat in &view.stats {
        lines.push(format!("{}: {}", stat.label, stat.value));
    }

    if !view.categories.is_empty() {
        lines.push(String::new());
        lines.push("Keyword Categories:".to_string());
        for (label, words) in &view.categories {
            let tags: Vec<String> = words.iter().map(|w| format!("[{}]", w)).collect();
            lines.push(format!("  {}: {}", label, tags.join(" ")));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_bar(bar: &ScoreBar) -> String {
    let filled = ((bar.width_percent() / 100.0) * BAR_CELLS as f64).round() as usize;
    format!(
        "{:<14}[{}{}] {:>5}%",
        bar.label,
        "█".repeat(filled),
        "░".repeat(BAR_CELLS - filled),
        format_number(bar.value)
    )
}

fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} bytes", bytes)
    }
}

/// 解析中スピナー
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
