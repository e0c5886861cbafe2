//! 解析結果パネル
//!
//! Loading / Error / Success を切り替えて表示する。Idleでは何も出さない

use leptos::prelude::*;
use resume_reviewer_common::{AnalysisState, ResultView, ReviewForm};

use crate::components::score_breakdown::ScoreBreakdown;

#[component]
pub fn ResultPanel(form: RwSignal<ReviewForm>) -> impl IntoView {
    move || match form.with(|f| f.state().clone()) {
        AnalysisState::Idle => ().into_any(),
        AnalysisState::Loading => view! {
            <div class="result-panel loading">
                <h3>"Analyzing Resume..."</h3>
                <p>"Please wait while we analyze your resume..."</p>
            </div>
        }
        .into_any(),
        AnalysisState::Error(message) => view! {
            <div class="result-panel error">
                <h3>"Error"</h3>
                <p>{message}</p>
            </div>
        }
        .into_any(),
        AnalysisState::Success(report) => view! {
            <ResultCard result=ResultView::from_report(&report) />
        }
        .into_any(),
    }
}

#[component]
fn ResultCard(result: ResultView) -> impl IntoView {
    let tier = result.tier;
    let score_text = result.score_text();

    let stats = result
        .stats
        .into_iter()
        .map(|stat| view! { <p><strong>{stat.label}": "</strong>{stat.value}</p> })
        .collect_view();

    let categories = (!result.categories.is_empty()).then(|| {
        view! { <KeywordTags categories=result.categories /> }
    });

    view! {
        <div class=format!("result-panel result-{}", tier.as_str())>
            <h3>"Resume Analysis"</h3>
            <div class="score" style=format!("color: {}", tier.color())>
                <span class="score-emoji">{tier.emoji()}</span>
                <span class="score-value">{score_text}</span>
            </div>
            <p class="feedback"><strong>"Feedback: "</strong>{result.feedback}</p>
            {result.breakdown.map(|bars| view! { <ScoreBreakdown bars=bars /> })}
            <div class="stats">{stats}</div>
            {categories}
        </div>
    }
}

#[component]
fn KeywordTags(categories: Vec<(&'static str, Vec<String>)>) -> impl IntoView {
    view! {
        <div class="keyword-categories">
            {categories
                .into_iter()
                .map(|(label, words)| {
                    view! {
                        <div class="keyword-category">
                            <h5>{label}</h5>
                            <div class="tags">
                                {words
                                    .into_iter()
                                    .map(|word| view! { <span class="tag">{word}</span> })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
