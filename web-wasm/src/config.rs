//! バックエンド設定
//!
//! ベースURLは起動後に一度だけ読んでキャッシュする。優先順位:
//! 1. `window.BACKEND_BASE_URL` グローバル変数
//! 2. `<meta name="backend-base-url">` のcontent属性
//! 3. どちらもなければ空文字（同一オリジンに投げる）

use std::cell::OnceCell;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlMetaElement;

thread_local! {
    static BACKEND_BASE: OnceCell<String> = const { OnceCell::new() };
}

/// バックエンドのベースURL（末尾スラッシュなし）
pub fn backend_base() -> String {
    BACKEND_BASE.with(|cell| cell.get_or_init(read_backend_base).clone())
}

fn read_backend_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };

    if let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str("BACKEND_BASE_URL")) {
        if let Some(url) = value.as_string() {
            return normalize(&url);
        }
    }

    let meta = window
        .document()
        .and_then(|doc| doc.query_selector("meta[name=backend-base-url]").ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlMetaElement>().ok());
    if let Some(meta) = meta {
        return normalize(&meta.content());
    }

    String::new()
}

fn normalize(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
