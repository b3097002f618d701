//! `/api/analyze-fashion` 呼び出し
//!
//! 選択写真をmultipartでPOSTし、レスポンスを解析結果かユーザー向け
//! エラーメッセージに変換する。メッセージの優先順位はサーバーの
//! detail → エラーメッセージ → 固定文言。

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, RequestMode, Response};

use crate::app::PhotoItem;
use fashion_stylist_common::{
    extract_error_detail, failure_message, parse_analyze_response, AnalysisResult,
};

/// 解析エンドポイントのパス（ベースURLの後ろに付く）
const ANALYZE_PATH: &str = "/api/analyze-fashion";

/// multipartボディのフィールド名
const FILE_FIELD: &str = "file";

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
///
/// # Returns
/// Base64エンコードされたデータ部分、または抽出失敗時はNone
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出
///
/// 抽出失敗時は"image/jpeg"をデフォルトとして返す
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}

/// プレビュー用Data URLを元のバイト列のBlobへ戻す
///
/// `mime_type` が空ならData URL側の宣言を使う
pub fn data_url_to_blob(data_url: &str, mime_type: &str) -> Result<Blob, JsValue> {
    let base64_data = extract_base64_from_data_url(data_url)
        .ok_or_else(|| JsValue::from_str("Invalid data URL"))?;
    let bytes = STANDARD
        .decode(base64_data)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let array = Uint8Array::from(bytes.as_slice());
    let parts = js_sys::Array::of1(&array);
    let options = BlobPropertyBag::new();
    let mime = if mime_type.is_empty() {
        extract_mime_type_from_data_url(data_url)
    } else {
        mime_type
    };
    options.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}

/// JsValueからエラーメッセージ文字列を取り出す
fn js_error_message(value: &JsValue) -> Option<String> {
    if let Some(message) = value.as_string() {
        return Some(message);
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
}

fn js_failure(value: JsValue) -> String {
    failure_message(None, js_error_message(&value))
}

/// 写真を解析する
///
/// # Arguments
/// * `base_url` - バックエンドのベースURL（空なら同一オリジン）
/// * `photo` - 選択済みの写真
///
/// # Returns
/// * `Ok(AnalysisResult)` - 解析成功
/// * `Err(String)` - そのまま表示できる失敗メッセージ
pub async fn analyze_fashion(base_url: &str, photo: &PhotoItem) -> Result<AnalysisResult, String> {
    let result = post_photo(base_url, photo).await;
    if let Err(message) = &result {
        web_sys::console::error_1(&JsValue::from_str(&format!("Analysis error: {}", message)));
    }
    result
}

async fn post_photo(base_url: &str, photo: &PhotoItem) -> Result<AnalysisResult, String> {
    let blob = data_url_to_blob(&photo.data_url, &photo.mime_type).map_err(js_failure)?;
    let form = FormData::new().map_err(js_failure)?;
    form.append_with_blob_and_filename(FILE_FIELD, &blob, &photo.file_name)
        .map_err(js_failure)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    // Content-Typeは指定しない（multipart boundaryはブラウザが付ける）
    opts.set_body(form.as_ref());

    let url = format!("{}{}", base_url, ANALYZE_PATH);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_failure)?;

    let window = web_sys::window().ok_or_else(|| failure_message(None, None))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_failure)?;
    let resp: Response = resp_value.dyn_into().map_err(js_failure)?;

    // 成功・失敗どちらの分岐でもボディはテキストとして読む
    let body = match resp.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };

    if !resp.ok() {
        return Err(failure_message(
            extract_error_detail(&body),
            Some(format!("API error: {}", resp.status())),
        ));
    }

    parse_analyze_response(&body).map_err(|e| failure_message(None, Some(e.to_string())))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_data_url_to_blob_type_and_size() {
        // "AAAA" は3バイトにデコードされる
        let blob =
            data_url_to_blob("data:image/png;base64,AAAA", "image/png").expect("Blob変換失敗");
        assert_eq!(blob.type_(), "image/png");
        assert_eq!(blob.size(), 3.0);
    }

    #[wasm_bindgen_test]
    fn test_data_url_to_blob_mime_fallback() {
        // MIMEタイプ未指定ならData URL側の宣言を使う
        let blob = data_url_to_blob("data:image/webp;base64,AAAA", "").expect("Blob変換失敗");
        assert_eq!(blob.type_(), "image/webp");
    }

    #[wasm_bindgen_test]
    fn test_data_url_to_blob_rejects_plain_string() {
        assert!(data_url_to_blob("not a data url", "image/png").is_err());
    }
}
