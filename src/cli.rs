use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mri-classify")]
#[command(about = "脳MRI画像の腫瘍分類クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 推論エンドポイント（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像（またはフォルダ内の画像）を分類
    Predict {
        /// 画像ファイルまたはフォルダのパス
        #[arg(required = true)]
        input: PathBuf,

        /// 結果JSONの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// HTMLレポートの出力先
        #[arg(long)]
        report: Option<PathBuf>,

        /// HTMLレポートをダークテーマで出力
        #[arg(long)]
        dark: bool,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 設定管理
    Config {
        /// 推論エンドポイントを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_predict() {
        let cli = Cli::try_parse_from([
            "mri-classify",
            "--endpoint",
            "http://gpu-box:5000/",
            "predict",
            "scans",
            "-r",
            "-o",
            "out.json",
        ])
        .unwrap();

        assert_eq!(cli.endpoint.as_deref(), Some("http://gpu-box:5000/"));
        match cli.command {
            Commands::Predict { input, output, report, dark, recursive } => {
                assert_eq!(input, PathBuf::from("scans"));
                assert_eq!(output, Some(PathBuf::from("out.json")));
                assert!(report.is_none());
                assert!(!dark);
                assert!(recursive);
            }
            _ => panic!("expected predict"),
        }
    }

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(["mri-classify", "config", "--set-timeout", "30", "--show", "-v"])
            .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Config { set_endpoint, set_timeout, show } => {
                assert!(set_endpoint.is_none());
                assert_eq!(set_timeout, Some(30));
                assert!(show);
            }
            _ => panic!("expected config"),
        }
    }

    #[test]
    fn test_predict_requires_input() {
        assert!(Cli::try_parse_from(["mri-classify", "predict"]).is_err());
    }
}
