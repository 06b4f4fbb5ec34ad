//! スコア表コンポーネント
//!
//! マッチした候補のclass_dictionaryに基づき、人物ごとの
//! 確率スコア（整形済み）を表示する。

use celeb_classify_common::{ScoreRow, WidgetState};
use leptos::prelude::*;

use super::result_panel::display_name;

#[component]
pub fn ScoreTable(state: ReadSignal<WidgetState>) -> impl IntoView {
    let rows = move || state.with(|s| s.match_view().map(|v| v.rows.clone()).unwrap_or_default());

    view! {
        <div class="score-table" id="divClassTable">
            <table>
                <thead>
                    <tr>
                        <th>"選手"</th>
                        <th>"スコア"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|row: &ScoreRow| row.name.clone()
                        children=move |row: ScoreRow| {
                            view! {
                                <tr>
                                    <td>{display_name(&row.name)}</td>
                                    <td class="score-cell" id=format!("score_{}", row.name)>
                                        {row.display.clone()}
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
