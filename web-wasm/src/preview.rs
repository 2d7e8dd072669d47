//! 選択画像のプレビュー読込

use gloo::file::futures::read_as_data_url;
use web_sys::File;

/// ファイルをData URLとして読み込む
pub async fn read_preview(file: &File) -> Result<String, String> {
    let blob = gloo::file::File::from(file.clone());
    read_as_data_url(&blob).await.map_err(|e| e.to_string())
}
