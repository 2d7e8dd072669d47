//! 推論エンドポイントへのアップロード
//!
//! `FormData` のフィールド `file` に画像を入れてPOSTする。
//! 通信失敗はエラーではなく `Outcome::transport_failure()` として返す。

use mri_classifier_common::{interpret_response, Endpoint, Outcome};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// マルチパートのフィールド名
pub const FILE_FIELD: &str = "file";

/// アップロード用のフォームデータを作成
pub fn build_form_data(file: &File) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())?;
    Ok(form)
}

/// 画像を送信して結果を得る
pub async fn predict(endpoint: &Endpoint, file: &File) -> Outcome {
    match send(endpoint, file).await {
        Ok((status, body)) => interpret_response(status, &body),
        Err(e) => {
            gloo::console::warn!("prediction request failed:", e);
            Outcome::transport_failure()
        }
    }
}

/// fetch API呼び出し（ステータスとボディ本文を返す）
async fn send(endpoint: &Endpoint, file: &File) -> Result<(u16, String), JsValue> {
    let form = build_form_data(file)?;

    // Content-Type はブラウザがboundary付きで設定する
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(endpoint.as_str(), &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), text.as_string().unwrap_or_default()))
}
