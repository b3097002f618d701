//! 機能紹介コンポーネント（解析結果がないときだけ表示）

use leptos::prelude::*;

#[component]
pub fn FeatureShowcase() -> impl IntoView {
    view! {
        <div class="showcase">
            <h2>"AI-Powered Fashion Analysis"</h2>
            <p class="text-muted">
                "Upload any fashion photo and get comprehensive styling insights powered by advanced AI"
            </p>
            <div class="showcase-grid">
                <div class="card showcase-card">
                    <div class="showcase-icon">"📷"</div>
                    <h3>"Smart Analysis"</h3>
                    <p class="text-muted">
                        "AI identifies clothing pieces, colors, patterns and style elements with precision"
                    </p>
                </div>
                <div class="card showcase-card">
                    <div class="showcase-icon">"🎨"</div>
                    <h3>"Color Expertise"</h3>
                    <p class="text-muted">
                        "Professional color analysis and palette recommendations for your style"
                    </p>
                </div>
                <div class="card showcase-card">
                    <div class="showcase-icon">"💡"</div>
                    <h3>"Expert Tips"</h3>
                    <p class="text-muted">
                        "Personalized styling advice and recommendations from AI fashion expert"
                    </p>
                </div>
            </div>
        </div>
    }
}
