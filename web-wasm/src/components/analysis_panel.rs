//! 解析結果パネルコンポーネント
//!
//! 解析済みのときだけ読み取り専用カードを並べる。欠損フィールドは
//! fashion-stylist-common側のフォールバック文言で埋める。

use leptos::prelude::*;

use crate::app::AppState;
use fashion_stylist_common::AnalysisResult;

#[component]
pub fn AnalysisPanel(state: ReadSignal<AppState>) -> impl IntoView {
    view! {
        {move || {
            state.get().analysis().cloned().map(|analysis| {
                view! {
                    <div class="results">
                        <OverallCard analysis=analysis.clone() />
                        <PaletteCard analysis=analysis.clone() />
                        <TipsCard analysis=analysis.clone() />
                        {analysis.has_pieces().then(|| view! { <PiecesCard analysis=analysis.clone() /> })}
                    </div>
                }
            })
        }}
    }
}

#[component]
fn OverallCard(analysis: AnalysisResult) -> impl IntoView {
    view! {
        <section class="card">
            <h2 class="card-title">"🎯 Style Analysis"</h2>
            <div class="overall-grid">
                <div>
                    <p class="field-label">"Style Category"</p>
                    <span class="badge badge-outline">
                        {analysis.overall_analysis.style_category_text().to_string()}
                    </span>
                </div>
                <div>
                    <p class="field-label">"Formality"</p>
                    <span class="badge badge-outline">
                        {analysis.overall_analysis.formality_text().to_string()}
                    </span>
                </div>
            </div>
            <p class="field-label">"Best Occasions"</p>
            <div class="badge-row">
                {analysis
                    .occasions()
                    .into_iter()
                    .map(|occasion| view! { <span class="badge">{occasion}</span> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PaletteCard(analysis: AnalysisResult) -> impl IntoView {
    view! {
        <section class="card">
            <h2 class="card-title">"🎨 Color Palette"</h2>
            <div class="badge-row">
                {analysis
                    .colors()
                    .into_iter()
                    .map(|color| view! { <span class="badge badge-outline">{color}</span> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn TipsCard(analysis: AnalysisResult) -> impl IntoView {
    view! {
        <section class="card">
            <h2 class="card-title">"💡 Expert Styling Tips"</h2>
            <ul class="tips-list">
                {analysis
                    .tips()
                    .into_iter()
                    .map(|tip| view! { <li>{tip}</li> })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn PiecesCard(analysis: AnalysisResult) -> impl IntoView {
    view! {
        <section class="card">
            <h2 class="card-title">"👕 Identified Items"</h2>
            <div class="pieces-list">
                {analysis
                    .pieces()
                    .into_iter()
                    .map(|piece| {
                        view! {
                            <div class="piece-card">
                                <div class="piece-head">
                                    <h4>{piece.type_text().to_string()}</h4>
                                    <span class="badge badge-outline">
                                        {piece.style_text().to_string()}
                                    </span>
                                </div>
                                <p class="piece-description">
                                    {piece.description_text().to_string()}
                                </p>
                                <p class="piece-meta">
                                    <span>{format!("Fit: {}", piece.fit_text())}</span>
                                    <span>{format!("Pattern: {}", piece.pattern_text())}</span>
                                </p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
