//! ビルド時設定

use mri_classifier_common::Endpoint;

/// 推論エンドポイント
///
/// ビルド時の環境変数 `MRI_CLASSIFIER_ENDPOINT` で上書きできる。
/// 値が不正な場合は警告を出して既定値を使う。
pub fn endpoint() -> Endpoint {
    match option_env!("MRI_CLASSIFIER_ENDPOINT") {
        Some(url) => Endpoint::parse(url).unwrap_or_else(|e| {
            gloo::console::warn!(format!("{}; falling back to {}", e, Endpoint::default()));
            Endpoint::default()
        }),
        None => Endpoint::default(),
    }
}
