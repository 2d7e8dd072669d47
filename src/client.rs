//! 推論サービスへのアップロード
//!
//! フォームフィールド `file` に画像を載せてPOSTし、結果を `Outcome` に変換する。
//! サービス側の失敗はエラーではなく結果として返す。

use crate::error::Result;
use crate::scanner::ImageFile;
use mri_classifier_common::{interpret_response, Endpoint, Outcome};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

/// マルチパートのフィールド名
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Clone)]
pub struct PredictClient {
    http: reqwest::Client,
    endpoint: Endpoint,
}

impl PredictClient {
    pub fn new(endpoint: Endpoint, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// 画像を送信して結果を得る
    pub async fn predict(&self, image: &ImageFile) -> Outcome {
        let form = match build_form(image) {
            Ok(form) => form,
            Err(e) => {
                tracing::warn!(file = %image.file_name, error = %e, "failed to build upload form");
                return Outcome::transport_failure();
            }
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            file = %image.file_name,
            bytes = image.bytes.len(),
            "sending prediction request"
        );

        let response = match self.http.post(self.endpoint.as_str()).multipart(form).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(endpoint = %self.endpoint, error = %e, "prediction request failed");
                return Outcome::transport_failure();
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(%status, error = %e, "failed to read prediction response body");
                return Outcome::transport_failure();
            }
        };

        tracing::debug!(%status, body_len = body.len(), "prediction response received");

        interpret_response(status.as_u16(), &body)
    }
}

fn build_form(image: &ImageFile) -> Result<Form> {
    let part = Part::bytes(image.bytes.clone())
        .file_name(image.file_name.clone())
        .mime_str(image.mime_type)?;
    Ok(Form::new().part(FILE_FIELD, part))
}
