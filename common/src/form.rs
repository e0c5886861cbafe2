//! アップロード&レビューフォームの状態管理
//!
//! 状態は「選択中のファイル」と「最後の解析結果」の2つだけ。
//!
//! ```text
//! Idle    --select_file-->          Idle
//! Idle    --begin_submit(no file)-> Idle      (アラートのみ)
//! Idle    --begin_submit(file)-->   Loading
//! Loading --complete(ok)-->         Success
//! Loading --complete(error)-->      Error
//! Success / Error --begin_submit--> Loading
//! ```
//!
//! Loading中の再送信は `SubmitRejected::InFlight` で拒否し、
//! 古い世代のレスポンスは `complete` で破棄する。

use std::fmt;

use crate::accept::accepts_mime;
use crate::response::{interpret_response, DEFAULT_FAILURE_MESSAGE};
use crate::types::AnalysisReport;

/// フォームが扱うファイルハンドル
///
/// CLI・Webとも読み込み済みの `SelectedFile` を使う。
/// 状態遷移は名前・種別・サイズしか見ないので、バイト列を持たないハンドルでも動く
pub trait UploadFile: Clone {
    fn file_name(&self) -> &str;
    fn content_type(&self) -> &str;
    fn size(&self) -> u64;
}

/// 選択されたファイル（バイト列を保持）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

impl UploadFile for SelectedFile {
    fn file_name(&self) -> &str {
        &self.name
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// 解析結果の状態
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AnalysisState {
    #[default]
    Idle,
    Loading,
    Success(AnalysisReport),
    Error(String),
}

impl AnalysisState {
    pub fn is_loading(&self) -> bool {
        matches!(self, AnalysisState::Loading)
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            AnalysisState::Success(report) => Some(report),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            AnalysisState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// 送信結果（HTTPレスポンスまたは通信失敗）
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// ステータスコードとレスポンスボディ
    Response { status: u16, body: String },
    /// ネットワークエラーなど、レスポンスが得られなかった場合
    Failed(String),
}

impl AnalysisOutcome {
    /// 解析結果の状態に変換
    pub fn into_state(self) -> AnalysisState {
        match self {
            AnalysisOutcome::Response { status, body } => interpret_response(status, &body),
            AnalysisOutcome::Failed(message) => {
                let message = message.trim();
                if message.is_empty() {
                    AnalysisState::Error(DEFAULT_FAILURE_MESSAGE.to_string())
                } else {
                    AnalysisState::Error(message.to_string())
                }
            }
        }
    }
}

/// 送信が拒否された理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    /// ファイル未選択（ユーザーにアラートを出す）
    NoFile,
    /// 解析中の再送信
    InFlight,
}

impl fmt::Display for SubmitRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitRejected::NoFile => write!(f, "Please upload a resume first."),
            SubmitRejected::InFlight => write!(f, "An analysis is already in progress."),
        }
    }
}

impl std::error::Error for SubmitRejected {}

/// 送信チケット
///
/// `begin_submit` が発行し、`complete` に世代番号を渡して結果を反映する
#[derive(Debug, Clone)]
pub struct Submission<F> {
    pub generation: u64,
    pub file: F,
}

/// アップロード&レビューフォーム
#[derive(Debug, Clone)]
pub struct ReviewForm<F = SelectedFile> {
    file: Option<F>,
    state: AnalysisState,
    generation: u64,
}

impl<F> Default for ReviewForm<F> {
    fn default() -> Self {
        Self {
            file: None,
            state: AnalysisState::Idle,
            generation: 0,
        }
    }
}

impl<F: UploadFile> ReviewForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    /// ファイルを選択（検証なしで置き換える）
    pub fn select_file(&mut self, file: F) {
        self.file = Some(file);
    }

    /// ドロップされたファイルを選択
    ///
    /// MIMEタイプが対象外なら何もせず `false` を返す
    pub fn drop_file(&mut self, file: F) -> bool {
        if !accepts_mime(file.content_type()) {
            return false;
        }
        self.select_file(file);
        true
    }

    /// 送信ボタンを有効にできるか
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.state.is_loading()
    }

    /// 送信ボタンのラベル
    pub fn submit_label(&self) -> &'static str {
        if self.state.is_loading() {
            "Analyzing..."
        } else {
            "Analyze Resume"
        }
    }

    /// 送信を開始して Loading に遷移する
    ///
    /// ファイル未選択・解析中の場合は状態を変えずに拒否する
    pub fn begin_submit(&mut self) -> Result<Submission<F>, SubmitRejected> {
        let file = self.file.clone().ok_or(SubmitRejected::NoFile)?;
        if self.state.is_loading() {
            return Err(SubmitRejected::InFlight);
        }

        self.generation += 1;
        self.state = AnalysisState::Loading;
        Ok(Submission {
            generation: self.generation,
            file,
        })
    }

    /// 送信結果を反映する
    ///
    /// 現在の世代でなければ破棄して `false` を返す
    pub fn complete(&mut self, generation: u64, outcome: AnalysisOutcome) -> bool {
        if generation != self.generation || !self.state.is_loading() {
            return false;
        }
        self.state = outcome.into_state();
        true
    }
}
