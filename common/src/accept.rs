//! 受け付けるファイル形式のフィルタ
//!
//! ファイル選択は拡張子で、ドラッグ&ドロップはMIMEタイプで判定する

/// ファイル選択で受け付ける拡張子
pub const ACCEPTED_EXTENSIONS: [&str; 3] = [".pdf", ".doc", ".docx"];

/// `<input type="file">` の accept 属性値
pub const ACCEPT_ATTR: &str = ".pdf,.doc,.docx";

/// ドラッグ&ドロップで受け付けるMIMEタイプ
pub const ACCEPTED_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// ファイル名の拡張子が受け付け対象か（大文字小文字を区別しない）
pub fn accepts_extension(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// MIMEタイプが受け付け対象か
///
/// `; charset=...` などのパラメータは無視する
pub fn accepts_mime(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();
    ACCEPTED_MIME_TYPES.contains(&essence.as_str())
}
