//! アップロード/推論コントローラ
//!
//! 画面の状態を一つの値にまとめ、イベントごとの遷移だけで更新する。
//!
//! - ファイル選択: `select_file` → (非同期読込) → `preview_loaded` / `preview_failed`
//! - 送信: `submit` → (非同期通信) → `resolve`
//! - テーマ: `toggle_dark_mode`
//!
//! 非同期処理の完了報告には `Ticket` を添える。最新のイベントに対応しない
//! 報告（古いファイルの読込完了、置き換えられたリクエストの応答）は無視される。

use thiserror::Error;

use crate::response::Outcome;
use crate::types::{Prediction, NO_FILE_MESSAGE};

/// 非同期処理と、それを開始したイベントを対応付ける番号
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// プレビューの読込状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Loading,
    Ready(String),
    Unavailable,
}

/// 選択中のファイル
#[derive(Debug, Clone)]
pub struct Selection<F> {
    file: F,
    name: String,
    ticket: Ticket,
    preview: Preview,
}

impl<F> Selection<F> {
    pub fn file(&self) -> &F {
        &self.file
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }
}

/// 結果表示の状態
///
/// 予測とエラーは同時に存在しない。`Submitting` の間だけローディング表示。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting(Ticket),
    Succeeded(Prediction),
    Failed(String),
}

/// 送信開始時にシェルへ渡す情報
#[derive(Debug, Clone)]
pub struct Submission<F> {
    pub ticket: Ticket,
    pub file: F,
    pub name: String,
}

/// 送信が受け付けられなかった理由
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("{}", NO_FILE_MESSAGE)]
    NoFile,

    #[error("a prediction request is already in flight")]
    InFlight,
}

#[derive(Debug, Clone)]
pub struct Controller<F> {
    selection: Option<Selection<F>>,
    phase: Phase,
    dark_mode: bool,
    next_ticket: u64,
}

impl<F> Default for Controller<F> {
    fn default() -> Self {
        Self {
            selection: None,
            phase: Phase::Idle,
            dark_mode: false,
            next_ticket: 1,
        }
    }
}

impl<F: Clone> Controller<F> {
    pub fn new() -> Self {
        Self::default()
    }

    fn issue_ticket(&mut self) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }

    /// ファイル選択
    ///
    /// 以前の予測・説明・エラーを消し、プレビューを読込中にする。
    /// 進行中のリクエストがあれば放棄される（その応答は `resolve` で無視）。
    /// 戻り値のチケットはプレビュー読込の完了報告に使う。
    pub fn select_file(&mut self, file: F, name: impl Into<String>) -> Ticket {
        let ticket = self.issue_ticket();
        self.selection = Some(Selection {
            file,
            name: name.into(),
            ticket,
            preview: Preview::Loading,
        });
        self.phase = Phase::Idle;
        ticket
    }

    /// プレビュー読込完了
    ///
    /// 現在の選択に対応しない報告は無視して false を返す。
    pub fn preview_loaded(&mut self, ticket: Ticket, data_url: String) -> bool {
        match self.selection.as_mut() {
            Some(selection) if selection.ticket == ticket => {
                selection.preview = Preview::Ready(data_url);
                true
            }
            _ => false,
        }
    }

    /// プレビュー読込失敗
    ///
    /// プレビューを破棄し、ローカルエラーとして表示する。
    pub fn preview_failed(&mut self, ticket: Ticket, message: impl Into<String>) -> bool {
        match self.selection.as_mut() {
            Some(selection) if selection.ticket == ticket => {
                selection.preview = Preview::Unavailable;
                self.phase = Phase::Failed(message.into());
                true
            }
            _ => false,
        }
    }

    /// 送信
    ///
    /// ファイル未選択ならローカルエラーを設定して `NoFile`。
    /// リクエスト進行中なら状態を変えずに `InFlight`。
    pub fn submit(&mut self) -> Result<Submission<F>, SubmitRejected> {
        if self.is_loading() {
            return Err(SubmitRejected::InFlight);
        }

        let Some(selection) = self.selection.as_ref() else {
            self.phase = Phase::Failed(NO_FILE_MESSAGE.to_string());
            return Err(SubmitRejected::NoFile);
        };
        let file = selection.file.clone();
        let name = selection.name.clone();

        let ticket = self.issue_ticket();
        self.phase = Phase::Submitting(ticket);

        Ok(Submission { ticket, file, name })
    }

    /// 通信結果の反映
    ///
    /// 現在進行中のリクエストの結果のみ反映し、それ以外は false。
    pub fn resolve(&mut self, ticket: Ticket, outcome: Outcome) -> bool {
        if self.phase != Phase::Submitting(ticket) {
            return false;
        }

        self.phase = match outcome {
            Outcome::Success(prediction) => Phase::Succeeded(prediction),
            Outcome::Failure(message) => Phase::Failed(message),
        };
        true
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

impl<F> Controller<F> {
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn selection(&self) -> Option<&Selection<F>> {
        self.selection.as_ref()
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.selection.as_ref().map(|s| &s.file)
    }

    pub fn has_file(&self) -> bool {
        self.selection.is_some()
    }

    pub fn image_preview(&self) -> Option<&str> {
        match self.selection.as_ref().map(|s| &s.preview) {
            Some(Preview::Ready(data_url)) => Some(data_url.as_str()),
            _ => None,
        }
    }

    pub fn prediction(&self) -> Option<&str> {
        match &self.phase {
            Phase::Succeeded(p) => Some(p.label.as_str()),
            _ => None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match &self.phase {
            Phase::Succeeded(p) => Some(p.description.as_str()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) if !message.is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Submitting(_))
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// 送信ボタンの有効判定
    pub fn can_submit(&self) -> bool {
        self.has_file() && !self.is_loading()
    }

    /// 結果エリア（プレビュー/予測カード）の表示判定
    pub fn shows_results(&self) -> bool {
        self.image_preview().is_some() || self.prediction().is_some()
    }
}
