//! 解析API連携
//!
//! 選択ファイルを FormData の `file` フィールドに入れて
//! `POST {base}/analyze/` へ送る。タイムアウト・リトライなし

use js_sys::{Array, Uint8Array};
use resume_reviewer_common::{analyze_url, AnalysisOutcome, SelectedFile, DEFAULT_API_URL, FILE_FIELD};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, RequestMode, Response};

/// APIベースURL（ビルド時に `RESUME_REVIEWER_API_URL` で上書き可能）
pub fn api_base_url() -> &'static str {
    option_env!("RESUME_REVIEWER_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// ブラウザのFileを読み込んで `SelectedFile` にする
pub async fn read_file(file: web_sys::File) -> Result<SelectedFile, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(SelectedFile::new(file.name(), file.type_(), bytes))
}

/// ファイルを送信し、フォームに渡す結果を返す
///
/// fetch自体の失敗は `AnalysisOutcome::Failed` になる
pub async fn send(base_url: &str, file: &SelectedFile) -> AnalysisOutcome {
    match post_file(base_url, file).await {
        Ok((status, body)) => AnalysisOutcome::Response { status, body },
        Err(e) => {
            web_sys::console::error_2(&JsValue::from_str("Error:"), &e);
            AnalysisOutcome::Failed(js_error_message(&e))
        }
    }
}

async fn post_file(base_url: &str, file: &SelectedFile) -> Result<(u16, String), JsValue> {
    let parts = Array::of1(&Uint8Array::from(file.bytes.as_slice()));
    let bag = BlobPropertyBag::new();
    bag.set_type(&file.content_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &bag)?;

    let form_data = FormData::new()?;
    form_data.append_with_blob_and_filename(FILE_FIELD, &blob, &file.name)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let request = Request::new_with_str_and_init(&analyze_url(base_url), &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let status = resp.status();
    let body = JsFuture::from(resp.text()?).await?;
    Ok((status, body.as_string().unwrap_or_default()))
}

/// JSの例外からメッセージを取り出す（空ならフォーム側で既定文言になる）
fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_default()
}
