//! メインアプリケーションコンポーネント
//!
//! ウィジェット状態（保持ファイル1枚と送信フェーズ）をシグナルで持ち、
//! 送信 -> 分類API呼び出し -> 結果反映のパイプラインを配線する。

use celeb_classify_common::{evaluate, ClassifyError, SubmitOutcome, WidgetConfig, WidgetState};
use gloo::console;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::classify::classify_image;
use crate::components::{
    classify_button::ClassifyButton, header::Header, result_panel::ResultPanel,
    score_table::ScoreTable, settings_panel::SettingsPanel, upload_area::UploadArea,
};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (state, set_state) = signal(WidgetState::new());
    let (config, set_config) = signal(WidgetConfig::default());

    // 判定開始ハンドラ
    let on_classify = move |_: ()| {
        let data_url = match set_state.try_update(|s| s.begin_submit()) {
            Some(Ok(data_url)) => data_url,
            // ファイル未選択などはここで失敗が確定済み。
            // ネットワーク呼び出しは行わない。
            _ => return,
        };

        let cfg = config.get_untracked();
        spawn_local(async move {
            let outcome =
                match classify_image(&cfg.endpoint, cfg.payload_format, &data_url).await {
                    Ok(entries) => {
                        console::log!(format!("分類レスポンス: {}件", entries.len()));
                        match evaluate(&entries, cfg.score_precision) {
                            Some(view) => SubmitOutcome::Matched(view),
                            None => SubmitOutcome::Failed(ClassifyError::NoPrediction),
                        }
                    }
                    Err(err) => {
                        console::error!(format!("分類リクエスト失敗: {:?}", err));
                        SubmitOutcome::Failed(ClassifyError::Request(format!("{:?}", err)))
                    }
                };
            set_state.update(|s| s.finish_submit(outcome));
        });
    };

    view! {
        <div class="container">
            <Header />

            <SettingsPanel config=config set_config=set_config />

            <UploadArea state=state set_state=set_state />

            <ClassifyButton state=state on_classify=on_classify />

            <Show when=move || state.with(|s| s.error().is_some())>
                <div class="error-banner" id="error">
                    {move || state.with(|s| s.error().map(|e| e.to_string()).unwrap_or_default())}
                </div>
            </Show>

            <Show when=move || state.with(|s| s.match_view().is_some())>
                <ResultPanel state=state />
                <ScoreTable state=state />
            </Show>
        </div>
    }
}
