//! 脳MRI画像分類クライアント
//!
//! 推論サービスへ画像をアップロードし、分類ラベルと説明を表示する。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod session;
