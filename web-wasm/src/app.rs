//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use resume_reviewer_common::{AnalysisOutcome, ReviewForm, SelectedFile, Submission, SubmitRejected};
use web_sys::SubmitEvent;

use crate::api;
use crate::components::{
    header::Header,
    result_panel::ResultPanel,
    upload_area::UploadArea,
};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // フォーム状態（選択ファイル + 解析結果）
    let form = RwSignal::new(ReviewForm::new());
    let base_url = api::api_base_url();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submit(form, base_url);
    };

    let selected_name = move || {
        form.with(|f| f.file().map(|file| file.name.clone()).unwrap_or_default())
    };

    view! {
        <div class="container">
            <Header />

            <form class="review-form" on:submit=on_submit>
                <UploadArea form=form />
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || form.with(|f| !f.can_submit())
                >
                    {move || form.with(|f| f.submit_label())}
                </button>
            </form>

            <Show when=move || form.with(|f| f.file().is_some())>
                <p class="selected-file">
                    "Selected File: " <strong>{selected_name}</strong>
                </p>
            </Show>

            <ResultPanel form=form />
        </div>
    }
}

/// 送信処理
///
/// ファイル未選択ならアラートのみ。解析中の再送信は無視する
fn submit(form: RwSignal<ReviewForm>, base_url: &'static str) {
    let submission = match begin(form) {
        Ok(submission) => submission,
        Err(SubmitRejected::NoFile) => {
            gloo::dialogs::alert(&SubmitRejected::NoFile.to_string());
            return;
        }
        Err(SubmitRejected::InFlight) => return,
    };

    spawn_local(async move {
        let outcome = api::send(base_url, &submission.file).await;
        finish(form, submission.generation, outcome);
    });
}

/// Loading に遷移して送信チケットを受け取る
fn begin(form: RwSignal<ReviewForm>) -> Result<Submission<SelectedFile>, SubmitRejected> {
    // 破棄済みのシグナルでは何もしない
    form.try_update(|f| f.begin_submit())
        .unwrap_or(Err(SubmitRejected::InFlight))
}

fn finish(form: RwSignal<ReviewForm>, generation: u64, outcome: AnalysisOutcome) {
    form.update(|f| {
        if !f.complete(generation, outcome) {
            web_sys::console::warn_1(&"stale analysis response discarded".into());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_reviewer_common::AnalysisState;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn state(form: RwSignal<ReviewForm>) -> AnalysisState {
        form.with_untracked(|f| f.state().clone())
    }

    #[wasm_bindgen_test]
    fn wasm_begin_without_file_is_rejected() {
        let form = RwSignal::new(ReviewForm::new());

        assert_eq!(begin(form).unwrap_err(), SubmitRejected::NoFile);
        assert_eq!(state(form), AnalysisState::Idle);
    }

    #[wasm_bindgen_test]
    fn wasm_second_submit_while_loading_is_rejected() {
        let form = RwSignal::new(ReviewForm::new());
        form.update(|f| f.select_file(SelectedFile::new("cv.pdf", "application/pdf", vec![1, 2, 3])));

        let submission = begin(form).expect("送信が拒否された");
        assert_eq!(submission.file.name, "cv.pdf");
        assert!(state(form).is_loading());
        assert_eq!(begin(form).unwrap_err(), SubmitRejected::InFlight);

        finish(
            form,
            submission.generation,
            AnalysisOutcome::Response {
                status: 200,
                body: r#"{"score": 90, "feedback": "Great"}"#.to_string(),
            },
        );
        assert_eq!(state(form).report().map(|r| r.score), Some(90.0));
    }

    #[wasm_bindgen_test]
    fn wasm_stale_outcome_is_ignored() {
        let form = RwSignal::new(ReviewForm::new());
        form.update(|f| f.select_file(SelectedFile::new("cv.pdf", "application/pdf", vec![1])));

        let first = begin(form).expect("送信が拒否された");
        finish(form, first.generation, AnalysisOutcome::Failed("network down".into()));
        let second = begin(form).expect("送信が拒否された");

        finish(form, first.generation, AnalysisOutcome::Failed("late".into()));
        assert!(state(form).is_loading());

        finish(form, second.generation, AnalysisOutcome::Failed(String::new()));
        assert!(state(form).error_message().is_some());
    }
}
