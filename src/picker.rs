//! ファイル選択モジュール
//!
//! パスから履歴書ファイルを読み込み `SelectedFile` を作る。
//! 拡張子は .pdf / .doc / .docx のみ受け付ける

use crate::error::{ReviewerError, Result};
use resume_reviewer_common::{accepts_extension, SelectedFile};
use std::path::Path;

/// ファイルを読み込んで選択用のファイルを返す
pub fn load_file(path: &Path) -> Result<SelectedFile> {
    if !path.is_file() {
        return Err(ReviewerError::FileNotFound(path.display().to_string()));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    if !accepts_extension(&name) {
        return Err(ReviewerError::UnsupportedFile(name));
    }

    let bytes = std::fs::read(path)?;
    let content_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string();

    tracing::debug!(file = %name, size = bytes.len(), %content_type, "file selected");
    Ok(SelectedFile::new(name, content_type, bytes))
}
