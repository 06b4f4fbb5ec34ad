//! 設定パネルコンポーネント
//!
//! エンドポイントとペイロード形式は構成の選択であり、挙動は変えない。

use celeb_classify_common::{PayloadFormat, WidgetConfig};
use leptos::prelude::*;

#[component]
pub fn SettingsPanel(
    config: ReadSignal<WidgetConfig>,
    set_config: WriteSignal<WidgetConfig>,
) -> impl IntoView {
    view! {
        <div class="settings-panel">
            <div class="settings-grid">
                <div class="form-group">
                    <label for="endpoint">"分類エンドポイント"</label>
                    <input
                        type="text"
                        id="endpoint"
                        prop:value=move || config.with(|c| c.endpoint.clone())
                        on:input=move |ev| {
                            set_config.update(|c| c.endpoint = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="payload-format">"ペイロード形式"</label>
                    <select
                        id="payload-format"
                        on:change=move |ev| {
                            let format = PayloadFormat::parse(&event_target_value(&ev));
                            set_config.update(|c| c.payload_format = format);
                        }
                    >
                        <option
                            value="multipart"
                            selected=move || config.with(|c| c.payload_format == PayloadFormat::Multipart)
                        >
                            "multipart/form-data"
                        </option>
                        <option
                            value="json"
                            selected=move || config.with(|c| c.payload_format == PayloadFormat::Json)
                        >
                            "JSON"
                        </option>
                    </select>
                </div>
            </div>
        </div>
    }
}
