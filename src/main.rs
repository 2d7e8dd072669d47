use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use mri_classifier::{cli, client, config, error, report, scanner, session};
use cli::{Cli, Commands};
use client::PredictClient;
use config::Config;
use error::Result;
use session::{ClassificationRecord, Session};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Predict { input, output, report: report_path, dark, recursive } => {
            let config = Config::load()?;
            println!("🧠 mri-classify - 腫瘍分類\n");

            let endpoint = config.resolve_endpoint(cli.endpoint.as_deref())?;
            let client = PredictClient::new(endpoint, config.timeout())?;
            tracing::info!(endpoint = %client.endpoint(), "using prediction endpoint");

            let paths = scanner::collect_inputs(&input, recursive)?;
            println!("✔ {}枚の画像を検出\n", paths.len());

            let mut session = Session::new();
            if dark {
                session.toggle_dark_mode();
            }

            let progress = progress_bar(paths.len() as u64);
            let records = session::classify_all(&mut session, &client, &paths, &progress).await;

            print_records(&records);

            if let Some(output) = output {
                let json = serde_json::to_string_pretty(&records)?;
                std::fs::write(&output, json)?;
                println!("✔ 結果を保存: {}", output.display());
            }

            if let Some(report_path) = report_path {
                report::write_html(&report_path, &records, session.controller().dark_mode())?;
                println!("✔ レポートを保存: {}", report_path.display());
            }

            let failed = records.iter().filter(|r| !r.is_success()).count();
            if failed == 0 {
                println!("\n✅ 分類完了");
            } else {
                println!("\n⚠️ {}件中{}件が失敗しました", records.len(), failed);
            }

            if session::all_failed(&records) {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Config { set_endpoint, set_timeout, show } => {
            // 壊れた設定ファイルもこのサブコマンドで上書きできるようにする
            let mut config = Config::load_lenient()?;
            let mut changed = false;

            if let Some(url) = set_endpoint {
                config.set_endpoint(&url)?;
                changed = true;
                println!("✔ エンドポイントを設定しました: {}", config.endpoint);
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout_seconds(seconds)?;
                changed = true;
                println!("✔ タイムアウトを設定しました: {}秒", seconds);
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!("  エンドポイント: {}", config.endpoint);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "warn,mri_classifier=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn progress_bar(len: u64) -> ProgressBar {
    let progress = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}") {
        progress.set_style(style.progress_chars("=> "));
    }
    progress
}

fn print_records(records: &[ClassificationRecord]) {
    for record in records {
        match (&record.prediction, &record.error) {
            (Some(prediction), _) => {
                println!("📄 {}: {}", record.file_name, prediction);
                if let Some(description) = record.description.as_deref().filter(|d| !d.is_empty()) {
                    println!("   {}", description);
                }
            }
            (None, Some(error)) => println!("⚠️ {}: {}", record.file_name, error),
            (None, None) => println!("- {}: 結果なし", record.file_name),
        }
    }
    println!();
}
