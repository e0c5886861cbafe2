//! 対話モード
//!
//! ファイル選択 → 解析 → 結果表示 を繰り返す。
//! ファイル未選択で解析を選ぶとアラートを出すだけで通信しない

use crate::client::{self, AnalyzeClient};
use crate::error::Result;
use crate::picker;
use crate::render;
use dialoguer::{Input, Select};
use resume_reviewer_common::ReviewForm;
use std::path::PathBuf;

/// メニュー操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ChooseFile,
    Analyze,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 3] = [MenuAction::ChooseFile, MenuAction::Analyze, MenuAction::Quit];

    fn label(&self, form: &ReviewForm) -> String {
        match self {
            MenuAction::ChooseFile => match form.file() {
                Some(file) => format!("Choose file (current: {})", file.name),
                None => "Choose file".to_string(),
            },
            MenuAction::Analyze => form.submit_label().to_string(),
            MenuAction::Quit => "Quit".to_string(),
        }
    }
}

pub async fn run(client: &AnalyzeClient) -> Result<()> {
    println!("📄 AI Resume Reviewer\n");
    println!("API: {}\n", client.endpoint());

    let mut form = ReviewForm::new();

    loop {
        let labels: Vec<String> = MenuAction::ALL.iter().map(|a| a.label(&form)).collect();
        let choice = Select::new()
            .with_prompt("Select an action")
            .items(&labels)
            .default(if form.file().is_some() { 1 } else { 0 })
            .interact()?;

        match MenuAction::ALL[choice] {
            MenuAction::ChooseFile => {
                let path = Input::<String>::new()
                    .with_prompt("Resume path (.pdf/.doc/.docx)")
                    .interact_text()?;

                match picker::load_file(&PathBuf::from(path.trim())) {
                    Ok(file) => {
                        form.select_file(file);
                        print!("{}", render::render_state(form.file(), form.state()));
                    }
                    Err(e) => println!("⚠ {}", e),
                }
            }
            MenuAction::Analyze => {
                let pb = render::spinner("Analyzing Resume...");
                let submitted = client::submit(&mut form, client).await;
                pb.finish_and_clear();

                match submitted {
                    Ok(()) => print!("{}", render::render_state(form.file(), form.state())),
                    Err(rejected) => println!("⚠ {}", rejected),
                }
            }
            MenuAction::Quit => break,
        }
        println!();
    }

    Ok(())
}
