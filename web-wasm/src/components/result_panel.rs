//! 判定結果パネルコンポーネント
//!
//! ベストマッチしたクラスIDに対応する選手カードを表示する。

use celeb_classify_common::WidgetState;
use leptos::prelude::*;

/// 既知の選手（クラスID -> 表示名）
const PLAYERS: [(&str, &str); 4] = [
    ("lebron_james", "LeBron James"),
    ("michael_jordan", "Michael Jordan"),
    ("shaq", "Shaquille O'Neal"),
    ("steph_curry", "Stephen Curry"),
];

/// クラスIDから表示名を引く（未知のIDはそのまま表示）
pub fn display_name(class: &str) -> String {
    PLAYERS
        .iter()
        .find(|(id, _)| *id == class)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| class.to_string())
}

/// クラスIDからイニシャルを作る（カードのアバター代わり）
fn initials(class: &str) -> String {
    class
        .split('_')
        .filter_map(|part| part.chars().next())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[component]
pub fn ResultPanel(state: ReadSignal<WidgetState>) -> impl IntoView {
    let class_id =
        move || state.with(|s| s.match_view().map(|v| v.class.clone()).unwrap_or_default());

    view! {
        <div class="result-holder" id="resultHolder" data-player=class_id>
            <div class="player-card">
                <div class="player-avatar">{move || initials(&class_id())}</div>
                <h3>{move || display_name(&class_id())}</h3>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_known_player() {
        assert_eq!(display_name("shaq"), "Shaquille O'Neal");
        assert_eq!(display_name("steph_curry"), "Stephen Curry");
    }

    #[test]
    fn test_display_name_unknown_class() {
        // 未知のクラスIDはそのまま出す
        assert_eq!(display_name("kobe_bryant"), "kobe_bryant");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("lebron_james"), "LJ");
        assert_eq!(initials("shaq"), "S");
    }
}
