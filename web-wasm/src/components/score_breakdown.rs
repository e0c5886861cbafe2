//! スコア内訳バーコンポーネント

use leptos::prelude::*;
use resume_reviewer_common::{format_number, ScoreBar};

#[component]
pub fn ScoreBreakdown(bars: Vec<ScoreBar>) -> impl IntoView {
    view! {
        <div class="breakdown">
            <h4>"Detailed Breakdown:"</h4>
            {bars
                .into_iter()
                .map(|bar| {
                    view! {
                        <div class="breakdown-row">
                            <span class="breakdown-label">{bar.label}</span>
                            <div class="progress-bar">
                                <div
                                    class="progress-fill"
                                    style=format!("width: {}%", bar.width_percent())
                                />
                            </div>
                            <span class="breakdown-value">
                                {format!("{}%", format_number(bar.value))}
                            </span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
