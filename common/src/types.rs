//! 推論サービスとの通信型と表示用の型

use serde::{Deserialize, Serialize};

/// ファイル未選択で送信した場合のメッセージ
pub const NO_FILE_MESSAGE: &str = "Please select an image to proceed.";

/// 画像の読み込みに失敗した場合のメッセージ
pub const READ_ERROR_MESSAGE: &str = "The selected image could not be read. Please choose another file.";

/// 推論サービスのレスポンスボディ
///
/// 成功時は `prediction` と `description`、失敗時は `error` が入る。
/// どのフィールドも欠けている可能性があるため全てOption。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictResponse {
    /// 空でない予測ラベル
    pub fn prediction(&self) -> Option<&str> {
        non_empty(self.prediction.as_deref())
    }

    /// 空でないエラーメッセージ
    pub fn error(&self) -> Option<&str> {
        non_empty(self.error.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// 分類結果（ラベル + 説明文）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub description: String,
}
