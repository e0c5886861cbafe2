use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-review")]
#[command(about = "Upload a resume and get an AI review score", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 履歴書ファイルを1回解析して結果を表示
    Analyze {
        /// 履歴書ファイル (.pdf/.doc/.docx)
        #[arg(required = true)]
        file: PathBuf,

        /// APIベースURL（デフォルト: http://127.0.0.1:8000）
        #[arg(long)]
        api_url: Option<String>,

        /// 結果をJSONのまま出力
        #[arg(long)]
        json: bool,

        /// 結果JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 対話形式でファイル選択と解析を繰り返す
    Interactive {
        /// APIベースURL
        #[arg(long)]
        api_url: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// APIベースURLを保存
        #[arg(long, conflicts_with = "reset_api_url")]
        set_api_url: Option<String>,

        /// 保存したAPIベースURLを削除
        #[arg(long)]
        reset_api_url: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
