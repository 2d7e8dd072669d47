//! 推論サービスのレスポンス解釈
//!
//! HTTPステータスとボディを受け取り、画面に出す結果を一つに決める。
//! ブラウザ版とCLI版は同じ規則でレスポンスを扱う。

use crate::types::{Prediction, PredictResponse};

/// 構造化エラーメッセージが取り出せない場合の固定メッセージ
pub const FALLBACK_ERROR_MESSAGE: &str =
    "An error occurred while processing your request. Please try again.";

/// 1回の送信の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(Prediction),
    Failure(String),
}

impl Outcome {
    /// 通信自体が失敗した場合（接続不可、タイムアウトなど）
    pub fn transport_failure() -> Self {
        Outcome::Failure(FALLBACK_ERROR_MESSAGE.to_string())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

/// HTTPステータスとレスポンスボディから結果を決定
///
/// - 2xx かつ `prediction` あり → 成功（`description` 欠落時は空文字）
/// - `error` あり（ステータス問わず）→ そのメッセージで失敗
/// - それ以外（JSONでない、どちらも無い、`error` 無しの非2xx）→ 固定メッセージで失敗
pub fn interpret_response(status: u16, body: &str) -> Outcome {
    let is_success_status = (200..300).contains(&status);

    let Ok(response) = serde_json::from_str::<PredictResponse>(body) else {
        return Outcome::transport_failure();
    };

    if is_success_status {
        if let Some(label) = response.prediction() {
            return Outcome::Success(Prediction {
                label: label.to_string(),
                description: response.description.clone().unwrap_or_default(),
            });
        }
    }

    match response.error() {
        Some(message) => Outcome::Failure(message.to_string()),
        None => Outcome::transport_failure(),
    }
}
