//! 判定実行ボタンコンポーネント
//!
//! ファイル未選択でも押せる（押すとエラー表示になる）。
//! 送信中の再クリックは直列化しない。後着のレスポンスが勝つ。

use celeb_classify_common::WidgetState;
use leptos::prelude::*;

#[component]
pub fn ClassifyButton<F>(state: ReadSignal<WidgetState>, on_classify: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <div class="classify-actions">
            <button
                class="btn btn-primary"
                id="submitBtn"
                on:click={
                    let on_classify = on_classify.clone();
                    move |_| on_classify(())
                }
            >
                {move || if state.with(|s| s.is_submitting()) { "判定中..." } else { "判定する" }}
            </button>
        </div>
    }
}
