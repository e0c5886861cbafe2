//! 解析結果のJSON保存

use crate::error::Result;
use resume_reviewer_common::AnalysisReport;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 保存形式: サーバーのペイロードにファイル名と解析日時を付ける
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedReport {
    pub file_name: String,
    pub analyzed_at: String,
    #[serde(flatten)]
    pub report: AnalysisReport,
}

impl SavedReport {
    pub fn new(file_name: &str, report: &AnalysisReport) -> Self {
        Self {
            file_name: file_name.to_string(),
            analyzed_at: chrono::Local::now().to_rfc3339(),
            report: report.clone(),
        }
    }
}

pub fn save_report(path: &Path, file_name: &str, report: &AnalysisReport) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(&SavedReport::new(file_name, report))?;
    std::fs::write(path, json)?;
    Ok(())
}
