//! トースト通知コンポーネント

use leptos::prelude::*;

/// 通知の種類
#[derive(Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Success,
    Destructive,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Destructive => "destructive",
        }
    }
}

/// 画面右下に数秒表示される通知
#[derive(Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            kind: NoticeKind::Success,
        }
    }

    pub fn destructive(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            kind: NoticeKind::Destructive,
        }
    }
}

/// 表示中の通知と消灯タイマーの世代管理
///
/// `show()` が返した世代番号と一致する `dismiss()` だけを受け付ける。
/// 直前の通知が作った古いタイマーは新しい通知を消せない
#[derive(Clone, Default, PartialEq)]
pub struct NoticeState {
    seq: u64,
    current: Option<Notice>,
}

impl NoticeState {
    /// 通知を表示して世代番号を返す
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.seq += 1;
        self.current = Some(notice);
        self.seq
    }

    /// 世代が現役のときだけ通知を消す
    pub fn dismiss(&mut self, seq: u64) {
        if self.seq == seq {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

#[component]
pub fn Toast(notice: ReadSignal<NoticeState>) -> impl IntoView {
    view! {
        {move || {
            notice.get().current().cloned().map(|notice| {
                let kind_class = format!("toast {}", notice.kind.as_str());
                view! {
                    <div class=kind_class role="status">
                        <p class="toast-title">{notice.title}</p>
                        <p class="toast-message">{notice.message}</p>
                    </div>
                }
            })
        }}
    }
}

// =====================================================================
// テスト
// =====================================================================
