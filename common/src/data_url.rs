//! Data URL ユーティリティ
//!
//! プレビュー表示用の `data:image/png;base64,...` 形式を作る

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// バイト列をData URLに変換
pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}
