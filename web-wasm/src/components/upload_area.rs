//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップとファイル選択の両方を受け付け、バリデーションを
//! 通ったらプレビュー用Data URLを作って選択コールバックに渡す。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, FileReader, HtmlInputElement};

use crate::app::{AppState, PhotoItem};
use crate::components::toast::Notice;
use fashion_stylist_common::validate_upload;

#[component]
pub fn UploadArea<FS, FR, FA, FN>(
    state: ReadSignal<AppState>,
    on_photo_selected: FS,
    on_reset: FR,
    on_analyze: FA,
    on_notice: FN,
) -> impl IntoView
where
    FS: Fn(PhotoItem) + 'static + Clone + Send + Sync,
    FR: Fn(()) + 'static + Clone + Send + Sync,
    FA: Fn(()) + 'static + Clone + Send + Sync,
    FN: Fn(Notice) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);

    // バリデーション拒否時は状態を変えずに通知だけ出す
    let handle_file = {
        let on_photo_selected = on_photo_selected.clone();
        let on_notice = on_notice.clone();
        move |file: File| {
            if let Err(err) = validate_upload(&file.type_(), file.size() as u64) {
                on_notice(Notice::destructive(err.title(), &err.to_string()));
                return;
            }
            read_file(file, on_photo_selected.clone());
        }
    };

    let on_drop = {
        let handle_file = handle_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    if let Some(file) = files.get(0) {
                        handle_file(file);
                    }
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_input_change = {
        let handle_file = handle_file.clone();
        move |ev: Event| {
            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            if let Some(files) = input.files() {
                if let Some(file) = files.get(0) {
                    handle_file(file);
                }
            }
            // 同じファイルをもう一度選べるようにする
            input.set_value("");
        }
    };

    let zone_class = move || {
        let mut classes = vec!["upload-area"];
        if is_dragover.get() {
            classes.push("dragover");
        }
        classes.join(" ")
    };

    view! {
        <div
            class=zone_class
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            // ファイル入力は両状態で重ねて描画する。プレビュー中でも
            // クリックだけで別の写真を選び直せる
            <input
                type="file"
                accept="image/*"
                class="upload-input"
                on:change=on_input_change
            />
            {
                let on_reset = on_reset.clone();
                move || match state.get().photo().cloned() {
                    None => view! {
                        <div class="upload-empty">
                            <div class="upload-icon">"📷"</div>
                            <p class="upload-cta">"Drop your fashion photo here"</p>
                            <p class="text-muted">
                                "or click to browse (JPG, PNG, HEIC up to 5MB)"
                            </p>
                        </div>
                    }
                    .into_any(),
                    Some(photo) => {
                        let on_reset = on_reset.clone();
                        view! {
                            <div class="upload-preview">
                                <img src=photo.data_url.clone() alt=photo.file_name.clone() />
                                <p class="text-muted">
                                    {format!(
                                        "{} · {:.0} KB",
                                        photo.file_name,
                                        photo.size as f64 / 1024.0
                                    )}
                                </p>
                                <button
                                    class="btn btn-secondary btn-small"
                                    on:click=move |_| on_reset(())
                                >
                                    "Choose Different Photo"
                                </button>
                            </div>
                        }
                        .into_any()
                    }
                }
            }
        </div>

        {
            let on_analyze = on_analyze.clone();
            move || {
                let current = state.get();
                current.photo().is_some().then(|| {
                    let analyzing = current.is_analyzing();
                    let failed = match &current {
                        AppState::Failed(_, message) => Some(message.clone()),
                        _ => None,
                    };
                    let on_analyze = on_analyze.clone();
                    view! {
                        <div class="analyze-actions">
                            <button
                                class="btn btn-primary"
                                disabled=analyzing
                                on:click=move |_| on_analyze(())
                            >
                                {if analyzing {
                                    "Analyzing Fashion..."
                                } else {
                                    "✨ Analyze My Style"
                                }}
                            </button>
                            {failed.map(|message| view! { <p class="upload-error">{message}</p> })}
                        </div>
                    }
                })
            }
        }
    }
}

fn read_file<F>(file: File, on_photo_selected: F)
where
    F: Fn(PhotoItem) + 'static,
{
    let file_name = file.name();
    let mime_type = file.type_();
    let size = file.size() as u64;

    let Ok(reader) = FileReader::new() else {
        return;
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_photo_selected(PhotoItem {
                    file_name: file_name.clone(),
                    mime_type: mime_type.clone(),
                    size,
                    data_url,
                });
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}

// =====================================================================
// テスト（ブラウザ実行）
// =====================================================================
