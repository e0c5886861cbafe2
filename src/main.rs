use clap::Parser;
use resume_reviewer::{cli, client, config, error, export, interactive, logging, picker, render};
use cli::{Cli, Commands};
use client::AnalyzeClient;
use config::Config;
use error::Result;
use resume_reviewer_common::{AnalysisState, ReviewForm};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // config コマンドは壊れた設定でも起動して修復できるようにする
    let config = if matches!(cli.command, Commands::Config { .. }) {
        let config = Config::load_or_default()?;
        logging::init_or_default(cli.verbose, &config.log_level)?;
        config
    } else {
        let config = Config::load()?;
        logging::init(cli.verbose, &config.log_level)?;
        config
    };

    match cli.command {
        Commands::Analyze { file, api_url, json, output } => {
            let base_url = config.api_url(api_url.as_deref())?;
            let client = AnalyzeClient::new(&base_url)?;
            tracing::debug!(endpoint = client.endpoint(), "client ready");

            let mut form = ReviewForm::new();
            form.select_file(picker::load_file(&file)?);

            let pb = render::spinner("Analyzing Resume...");
            let submitted = client::submit(&mut form, &client).await;
            pb.finish_and_clear();
            submitted.map_err(|rejected| error::ReviewerError::Analysis(rejected.to_string()))?;

            match form.state() {
                AnalysisState::Success(report) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(report)?);
                    } else {
                        print!("{}", render::render_state(form.file(), form.state()));
                    }

                    if let Some(path) = output {
                        let name = form.file().map(|f| f.name.as_str()).unwrap_or_default();
                        export::save_report(&path, name, report)?;
                        println!("✔ Saved result: {}", path.display());
                    }
                }
                AnalysisState::Error(message) => {
                    if json {
                        println!("{}", serde_json::json!({ "error": message }));
                    } else {
                        print!("{}", render::render_state(form.file(), form.state()));
                    }
                    std::process::exit(1);
                }
                AnalysisState::Idle | AnalysisState::Loading => {
                    return Err(error::ReviewerError::Analysis("no response received".into()));
                }
            }
        }

        Commands::Interactive { api_url } => {
            let base_url = config.api_url(api_url.as_deref())?;
            let client = AnalyzeClient::new(&base_url)?;
            interactive::run(&client).await?;
        }

        Commands::Config { set_api_url, reset_api_url, show } => {
            let mut config = config;

            if let Some(url) = set_api_url {
                config.set_api_url(&url)?;
                config.save()?;
                println!("✔ API URL saved");
            }

            if reset_api_url {
                config.reset_api_url();
                config.save()?;
                println!("✔ API URL reset to default");
            }

            if show {
                println!("Settings:");
                println!("  Config file: {}", Config::config_path()?.display());
                println!("  API URL: {}", config.api_url(None)?);
                println!("  Log level: {}", config.log_level);
            }
        }
    }

    Ok(())
}
