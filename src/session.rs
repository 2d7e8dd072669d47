//! 1枚ごとの「選択 → 送信 → 結果反映」サイクル
//!
//! ブラウザ版と同じ `Controller` を使い、CLIでも同じ状態遷移を通す。

use crate::client::PredictClient;
use crate::scanner::{self, ImageFile};
use indicatif::ProgressBar;
use mri_classifier_common::{
    encode_data_url, Controller, Outcome, Submission, SubmitRejected, Ticket,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 1枚分の結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationRecord {
    pub file_name: String,

    #[serde(default)]
    pub file_path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// HTMLレポート用のプレビュー（JSONには出さない）
    #[serde(skip)]
    pub preview: Option<String>,
}

impl ClassificationRecord {
    fn local_error(path: &Path, message: String) -> Self {
        Self {
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            file_path: path.display().to_string(),
            error: Some(message),
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.prediction.is_some()
    }
}

#[derive(Debug, Default)]
pub struct Session {
    controller: Controller<Arc<ImageFile>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn controller(&self) -> &Controller<Arc<ImageFile>> {
        &self.controller
    }

    pub fn toggle_dark_mode(&mut self) {
        self.controller.toggle_dark_mode();
    }

    /// 画像を選択し、プレビュー用のData URLを設定
    pub fn select(&mut self, image: ImageFile) -> Ticket {
        let preview = encode_data_url(image.mime_type, &image.bytes);
        let name = image.file_name.clone();
        let ticket = self.controller.select_file(Arc::new(image), name);
        self.controller.preview_loaded(ticket, preview);
        ticket
    }

    pub fn submit(&mut self) -> Result<Submission<Arc<ImageFile>>, SubmitRejected> {
        self.controller.submit()
    }

    pub fn resolve(&mut self, ticket: Ticket, outcome: Outcome) -> bool {
        self.controller.resolve(ticket, outcome)
    }

    /// 現在の表示内容をレコード化
    pub fn record(&self) -> ClassificationRecord {
        let (file_name, file_path) = self
            .controller
            .selection()
            .map(|s| (s.name().to_string(), s.file().path.display().to_string()))
            .unwrap_or_default();

        ClassificationRecord {
            file_name,
            file_path,
            prediction: self.controller.prediction().map(str::to_string),
            description: self.controller.description().map(str::to_string),
            error: self.controller.error().map(str::to_string),
            preview: self.controller.image_preview().map(str::to_string),
        }
    }
}

/// 1枚を分類
pub async fn classify_path(
    session: &mut Session,
    client: &PredictClient,
    path: &Path,
) -> ClassificationRecord {
    let image = match scanner::load_image(path) {
        Ok(image) => image,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read image");
            return ClassificationRecord::local_error(path, e.to_string());
        }
    };

    session.select(image);

    let submission = match session.submit() {
        Ok(submission) => submission,
        Err(rejected) => {
            tracing::warn!(path = %path.display(), %rejected, "submission rejected");
            return session.record();
        }
    };

    let outcome = client.predict(&submission.file).await;
    session.resolve(submission.ticket, outcome);
    session.record()
}

/// 複数枚を順番に分類（同時に送信するのは常に1件）
pub async fn classify_all(
    session: &mut Session,
    client: &PredictClient,
    paths: &[PathBuf],
    progress: &ProgressBar,
) -> Vec<ClassificationRecord> {
    let mut records = Vec::with_capacity(paths.len());

    for path in paths {
        if let Some(name) = path.file_name() {
            progress.set_message(name.to_string_lossy().to_string());
        }
        let record = classify_path(session, client, path).await;
        records.push(record);
        progress.inc(1);
    }

    progress.finish_and_clear();
    records
}

/// 1件以上あり、すべて失敗したバッチ
pub fn all_failed(records: &[ClassificationRecord]) -> bool {
    !records.is_empty() && records.iter().all(|r| !r.is_success())
}
