//! アップロードエリアコンポーネント
//!
//! クリックでファイル選択（拡張子フィルタ）、ドラッグ&ドロップはMIMEタイプで判定。
//! 対象外のドロップは何もしない

use leptos::prelude::*;
use leptos::task::spawn_local;
use resume_reviewer_common::{accepts_mime, ReviewForm, SelectedFile, ACCEPT_ATTR};
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, HtmlInputElement};

use crate::api;

/// 選択方法
#[derive(Clone, Copy, PartialEq)]
enum Pick {
    Picker,
    Drop,
}

#[component]
pub fn UploadArea(form: RwSignal<ReviewForm>) -> impl IntoView {
    let (is_dragover, set_is_dragover) = signal(false);
    // 最後に開始した読み込みの番号
    let latest_read = StoredValue::new(0u64);

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            load_into_form(form, latest_read, file, Pick::Picker);
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            if accepts_mime(&file.type_()) {
                load_into_form(form, latest_read, file, Pick::Drop);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    view! {
        <label
            class=move || {
                if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <input
                type="file"
                accept=ACCEPT_ATTR
                style="display: none"
                on:change=on_change
            />
            <div class="upload-icon">"📄"</div>
            <p>"Drag & drop your resume or click to select"</p>
            <p class="text-muted">"Supported formats: PDF, DOC, DOCX"</p>
        </label>
    }
}

/// ファイルを非同期に読み込んでフォームに反映する
///
/// 読み込み中に次のファイルが選ばれたら、古い読み込みの結果は捨てる
fn load_into_form(
    form: RwSignal<ReviewForm>,
    latest_read: StoredValue<u64>,
    file: web_sys::File,
    pick: Pick,
) {
    let ticket = next_read(latest_read);
    spawn_local(async move {
        match api::read_file(file).await {
            Ok(selected) => {
                if !apply_read(form, latest_read, ticket, selected, pick) {
                    web_sys::console::debug_1(&"superseded file read discarded".into());
                }
            }
            Err(e) => web_sys::console::error_2(&JsValue::from_str("File read error:"), &e),
        }
    });
}

fn next_read(latest_read: StoredValue<u64>) -> u64 {
    latest_read.update_value(|n| *n += 1);
    latest_read.get_value()
}

/// 最新の読み込みなら選択を反映する。古ければ `false`
fn apply_read(
    form: RwSignal<ReviewForm>,
    latest_read: StoredValue<u64>,
    ticket: u64,
    selected: SelectedFile,
    pick: Pick,
) -> bool {
    if latest_read.get_value() != ticket {
        return false;
    }
    form.update(|f| match pick {
        Pick::Picker => f.select_file(selected),
        Pick::Drop => {
            f.drop_file(selected);
        }
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn pdf(name: &str) -> SelectedFile {
        SelectedFile::new(name, "application/pdf", b"%PDF-1.4".to_vec())
    }

    fn selected_name(form: RwSignal<ReviewForm>) -> Option<String> {
        form.with_untracked(|f| f.file().map(|file| file.name.clone()))
    }

    #[wasm_bindgen_test]
    fn wasm_late_read_of_earlier_selection_is_discarded() {
        let form = RwSignal::new(ReviewForm::new());
        let latest_read = StoredValue::new(0u64);

        let first = next_read(latest_read);
        let second = next_read(latest_read);

        // 後から選んだBの読み込みが先に終わる
        assert!(apply_read(form, latest_read, second, pdf("b.pdf"), Pick::Picker));
        assert!(!apply_read(form, latest_read, first, pdf("a.pdf"), Pick::Picker));

        assert_eq!(selected_name(form).as_deref(), Some("b.pdf"));
    }

    #[wasm_bindgen_test]
    fn wasm_dropped_file_with_other_mime_keeps_selection() {
        let form = RwSignal::new(ReviewForm::new());
        let latest_read = StoredValue::new(0u64);

        let ticket = next_read(latest_read);
        assert!(apply_read(form, latest_read, ticket, pdf("cv.pdf"), Pick::Drop));

        let ticket = next_read(latest_read);
        let text = SelectedFile::new("notes.txt", "text/plain", b"hi".to_vec());
        assert!(apply_read(form, latest_read, ticket, text, Pick::Drop));

        assert_eq!(selected_name(form).as_deref(), Some("cv.pdf"));
    }
}
