//! ヒーローヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="container">
                <p class="header-eyebrow">"✨ AI-Powered Fashion"</p>
                <h1>"Your Personal " <span class="accent">"AI Stylist"</span></h1>
                <p class="header-lead">
                    "Upload any fashion photo and get instant AI-powered styling advice, "
                    "color analysis, and personalized recommendations from your expert "
                    "fashion assistant."
                </p>
                <div class="badge-row">
                    <span class="badge">"📷 Photo Analysis"</span>
                    <span class="badge">"🎨 Color Theory"</span>
                    <span class="badge">"👕 Style Advice"</span>
                </div>
            </div>
        </header>
    }
}
