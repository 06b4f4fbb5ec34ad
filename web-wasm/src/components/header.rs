//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Celeb Classify - スポーツ選手画像判定"</h1>
        </header>
    }
}
