//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo::timers::callback::Timeout;

use crate::api;
use crate::components::{
    analysis_panel::AnalysisPanel,
    feature_showcase::FeatureShowcase,
    header::Header,
    toast::{Notice, NoticeState, Toast},
    upload_area::UploadArea,
};
use crate::config;
use fashion_stylist_common::AnalysisResult;

/// 選択中の写真（プレビュー用Data URL込み）
#[derive(Clone, PartialEq)]
pub struct PhotoItem {
    pub file_name: String,
    pub mime_type: String,
    pub size: u64,
    pub data_url: String,
}

/// アプリケーション状態
///
/// 写真と解析結果の有効な組み合わせだけを列挙する。
/// 「写真なしで解析中」のような不正状態は型で表現できない。
#[derive(Clone, Default, PartialEq)]
pub enum AppState {
    #[default]
    Empty,
    Selected(PhotoItem),
    Analyzing(PhotoItem),
    Done(PhotoItem, AnalysisResult),
    Failed(PhotoItem, String),
}

impl AppState {
    pub fn photo(&self) -> Option<&PhotoItem> {
        match self {
            AppState::Empty => None,
            AppState::Selected(photo)
            | AppState::Analyzing(photo)
            | AppState::Done(photo, _)
            | AppState::Failed(photo, _) => Some(photo),
        }
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        match self {
            AppState::Done(_, analysis) => Some(analysis),
            _ => None,
        }
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self, AppState::Analyzing(_))
    }

    /// この写真のリクエストが今も現役かどうか
    ///
    /// リセットや別写真の解析開始の後に届いた応答を適用しないための判定。
    /// 同時に1リクエストだけが結果を反映できる
    pub fn is_current_request(&self, photo: &PhotoItem) -> bool {
        matches!(self, AppState::Analyzing(current) if current == photo)
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (state, set_state) = signal(AppState::Empty);
    let (notice, set_notice) = signal(NoticeState::default());

    let notify = move |notice: Notice| {
        let mut seq = 0;
        set_notice.update(|holder| seq = holder.show(notice));
        // 世代が合わない消灯は無視されるので、後続の通知が早く消えることはない
        Timeout::new(4_000, move || {
            set_notice.update(|holder| holder.dismiss(seq));
        })
        .forget();
    };

    // 写真選択ハンドラ（新しい写真で以前の解析結果は消える）
    let on_photo_selected = move |photo: PhotoItem| {
        set_state.set(AppState::Selected(photo));
    };

    // リセットハンドラ（解析中でも初期状態に戻せる）
    let on_reset = move |_: ()| {
        set_state.set(AppState::Empty);
    };

    // 解析開始ハンドラ
    let on_analyze = move |_: ()| {
        let current = state.get_untracked();
        if current.is_analyzing() {
            return;
        }
        let Some(photo) = current.photo().cloned() else {
            return;
        };

        set_state.set(AppState::Analyzing(photo.clone()));

        spawn_local(async move {
            let result = api::analyze_fashion(&config::backend_base(), &photo).await;

            // リセットや別写真の解析開始の後に届いた応答は破棄する
            if !state.get_untracked().is_current_request(&photo) {
                return;
            }

            match result {
                Ok(analysis) => {
                    set_state.set(AppState::Done(photo, analysis));
                    notify(Notice::success(
                        "Analysis Complete!",
                        "Your fashion photo has been analyzed successfully",
                    ));
                }
                Err(message) => {
                    set_state.set(AppState::Failed(photo, message.clone()));
                    notify(Notice::destructive("Analysis Failed", &message));
                }
            }
        });
    };

    view! {
        <div class="app">
            <Header />

            <main class="container">
                <div class="main-grid">
                    <section class="card upload-card">
                        <h2 class="card-title">"📤 Upload Fashion Photo"</h2>
                        <UploadArea
                            state=state
                            on_photo_selected=on_photo_selected
                            on_reset=on_reset
                            on_analyze=on_analyze
                            on_notice=notify
                        />
                    </section>

                    <AnalysisPanel state=state />
                </div>

                <Show when=move || state.get().analysis().is_none()>
                    <FeatureShowcase />
                </Show>
            </main>

            <Toast notice=notice />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(name: &str) -> PhotoItem {
        PhotoItem {
            file_name: name.to_string(),
            mime_type: "image/jpeg".to_string(),
            size: 1024,
            data_url: format!("data:image/jpeg;base64,{}", name),
        }
    }

    #[test]
    fn test_current_request_accepts_matching_photo() {
        let state = AppState::Analyzing(photo("look1.jpg"));
        assert!(state.is_current_request(&photo("look1.jpg")));
    }

    #[test]
    fn test_current_request_rejects_other_photo() {
        // 写真2の解析中に届いた写真1の応答は現役ではない
        let state = AppState::Analyzing(photo("look2.jpg"));
        assert!(!state.is_current_request(&photo("look1.jpg")));
    }

    #[test]
    fn test_current_request_rejects_after_reset() {
        assert!(!AppState::Empty.is_current_request(&photo("look1.jpg")));
    }

    #[test]
    fn test_current_request_rejects_settled_states() {
        let p = photo("look1.jpg");
        assert!(!AppState::Selected(p.clone()).is_current_request(&p));
        assert!(!AppState::Done(p.clone(), AnalysisResult::default()).is_current_request(&p));
        assert!(!AppState::Failed(p.clone(), "failed".to_string()).is_current_request(&p));
    }
}
