//! 解析APIクライアント
//!
//! `POST {base}/analyze/` に multipart/form-data で1ファイルを送る。
//! タイムアウト・リトライはしない

use crate::error::Result;
use reqwest::multipart::{Form, Part};
use resume_reviewer_common::{
    analyze_url, AnalysisOutcome, ReviewForm, SelectedFile, SubmitRejected, FILE_FIELD,
};

pub struct AnalyzeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnalyzeClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("resume-reviewer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: analyze_url(base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// ファイルを送信し、結果をフォームに渡せる形で返す
    ///
    /// 通信エラーは `AnalysisOutcome::Failed` になる
    pub async fn send(&self, file: &SelectedFile) -> AnalysisOutcome {
        match self.post_file(file).await {
            Ok((status, body)) => {
                tracing::info!(status, endpoint = %self.endpoint, "analysis response received");
                AnalysisOutcome::Response { status, body }
            }
            Err(e) => {
                tracing::error!(error = %e, endpoint = %self.endpoint, "analysis request failed");
                AnalysisOutcome::Failed(e.to_string())
            }
        }
    }

    async fn post_file(&self, file: &SelectedFile) -> Result<(u16, String)> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.content_type)?;
        let form = Form::new().part(FILE_FIELD, part);

        tracing::info!(file = %file.name, size = file.bytes.len(), endpoint = %self.endpoint, "uploading resume");
        let response = self.http.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }
}

/// フォームの送信を1回実行する
///
/// ファイル未選択・解析中なら通信せずに拒否理由を返す
pub async fn submit(
    form: &mut ReviewForm,
    client: &AnalyzeClient,
) -> std::result::Result<(), SubmitRejected> {
    let submission = form.begin_submit()?;
    let outcome = client.send(&submission.file).await;
    if !form.complete(submission.generation, outcome) {
        tracing::warn!(generation = submission.generation, "stale analysis response discarded");
    }
    Ok(())
}
