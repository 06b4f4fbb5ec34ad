//! ウィジェット状態と遷移
//!
//! DOMへのアドホックな問い合わせの代わりに、保持ファイル1枚の
//! スロットと送信フェーズを型付きの状態として持つ。
//! 遷移はすべてUIイベントスレッドからのみ呼ばれる。

use crate::error::{ClassifyError, Result};
use crate::matcher::MatchView;

/// 選択済み画像（生バイト列と導出したData URL）
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    pub data_url: String,
}

/// スロット内のエンコード状態
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionStatus {
    /// 非同期読み込み中
    Encoding,
    /// Data URL生成済み（送信可能）
    Ready(SelectedImage),
    /// 読み込み失敗（送信はブロックされる）
    Unreadable,
}

#[derive(Debug, Clone, PartialEq)]
struct Slot {
    seq: u64,
    file_name: String,
    status: SelectionStatus,
}

/// 送信1回の結果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// ベストマッチあり
    Matched(MatchView),
    /// マッチなし・各種エラー（表示上は同じエラー領域に出る）
    Failed(ClassifyError),
}

/// 送信フェーズ: Idle -> Submitting -> Done
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Done(SubmitOutcome),
}

/// ウィジェット全体の状態
///
/// ファイルは常に高々1枚。2枚目が追加されたら先のファイルを
/// 黙って置き換える（エラーにはしない）。
#[derive(Debug, Clone, Default)]
pub struct WidgetState {
    slot: Option<Slot>,
    next_seq: u64,
    pub phase: SubmitPhase,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイル追加。保持中のファイルは置き換えられる。
    ///
    /// # Returns
    /// この選択を識別するトークン。エンコード完了時に照合し、
    /// 置き換え済みの選択の結果を破棄するために使う。
    pub fn add_file(&mut self, file_name: impl Into<String>) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.slot = Some(Slot {
            seq,
            file_name: file_name.into(),
            status: SelectionStatus::Encoding,
        });
        seq
    }

    /// エンコード完了
    ///
    /// トークンが現在の選択と一致しない場合（完了前に置き換えられた
    /// 場合）は結果を破棄してfalseを返す。
    pub fn finish_encode(&mut self, token: u64, image: SelectedImage) -> bool {
        match &mut self.slot {
            Some(slot) if slot.seq == token => {
                slot.status = SelectionStatus::Ready(image);
                true
            }
            _ => false,
        }
    }

    /// エンコード失敗（ファイル読み込み不能）
    pub fn fail_encode(&mut self, token: u64) -> bool {
        match &mut self.slot {
            Some(slot) if slot.seq == token => {
                slot.status = SelectionStatus::Unreadable;
                true
            }
            _ => false,
        }
    }

    /// 保持中のファイルを取り除く
    pub fn remove_file(&mut self) {
        self.slot = None;
    }

    pub fn has_file(&self) -> bool {
        self.slot.is_some()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.slot.as_ref().map(|slot| slot.file_name.as_str())
    }

    pub fn selection_status(&self) -> Option<&SelectionStatus> {
        self.slot.as_ref().map(|slot| &slot.status)
    }

    /// エンコード済みの選択画像（なければNone）
    pub fn selected_image(&self) -> Option<&SelectedImage> {
        match self.slot.as_ref().map(|slot| &slot.status) {
            Some(SelectionStatus::Ready(image)) => Some(image),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmitPhase::Submitting)
    }

    /// 送信開始
    ///
    /// ファイル未選択・読み込み未完了・読み込み失敗のときはErrを返し、
    /// そのまま失敗として確定する。呼び出し側はErrのとき
    /// ネットワーク呼び出しを行ってはならない。
    ///
    /// # Returns
    /// 送信すべき画像のData URL
    pub fn begin_submit(&mut self) -> Result<String> {
        let result = match self.slot.as_ref().map(|slot| &slot.status) {
            Some(SelectionStatus::Ready(image)) => Ok(image.data_url.clone()),
            Some(SelectionStatus::Encoding) => Err(ClassifyError::EncodingIncomplete),
            Some(SelectionStatus::Unreadable) => Err(ClassifyError::Unreadable),
            None => Err(ClassifyError::NoFileSelected),
        };
        self.phase = match &result {
            Ok(_) => SubmitPhase::Submitting,
            Err(err) => SubmitPhase::Done(SubmitOutcome::Failed(err.clone())),
        };
        result
    }

    /// 送信完了
    ///
    /// 多重送信は防がないため、後着のレスポンスが先着を上書きする。
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
        self.phase = SubmitPhase::Done(outcome);
    }

    /// 現在表示すべきマッチ結果
    pub fn match_view(&self) -> Option<&MatchView> {
        match &self.phase {
            SubmitPhase::Done(SubmitOutcome::Matched(view)) => Some(view),
            _ => None,
        }
    }

    /// 現在表示すべきエラー
    pub fn error(&self) -> Option<&ClassifyError> {
        match &self.phase {
            SubmitPhase::Done(SubmitOutcome::Failed(err)) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> SelectedImage {
        SelectedImage {
            file_name: name.to_string(),
            mime_type: "image/jpeg".to_string(),
            bytes: vec![1, 2, 3],
            data_url: format!("data:image/jpeg;base64,{}", name),
        }
    }

    // =============================================
    // 単一ファイル保持
    // =============================================

    #[test]
    fn test_add_file_holds_exactly_one() {
        let mut state = WidgetState::new();
        state.add_file("first.jpg");
        state.add_file("second.jpg");

        // 2枚目を追加しても保持されるのは1枚（後の方）だけ
        assert!(state.has_file());
        assert_eq!(state.file_name(), Some("second.jpg"));
    }

    #[test]
    fn test_replace_discards_stale_encode() {
        let mut state = WidgetState::new();
        let first = state.add_file("first.jpg");
        let second = state.add_file("second.jpg");

        // 置き換え前のファイルのエンコード完了は破棄される
        assert!(!state.finish_encode(first, image("first.jpg")));
        assert_eq!(state.selection_status(), Some(&SelectionStatus::Encoding));

        assert!(state.finish_encode(second, image("second.jpg")));
        assert!(state.selected_image().is_some());
    }

    #[test]
    fn test_remove_file_clears_slot() {
        let mut state = WidgetState::new();
        let token = state.add_file("photo.jpg");
        state.finish_encode(token, image("photo.jpg"));

        state.remove_file();
        assert!(!state.has_file());
    }

    #[test]
    fn test_fail_encode_marks_unreadable() {
        let mut state = WidgetState::new();
        let token = state.add_file("broken.jpg");

        assert!(state.fail_encode(token));
        assert_eq!(state.selection_status(), Some(&SelectionStatus::Unreadable));
    }

    #[test]
    fn test_fail_encode_stale_token_ignored() {
        let mut state = WidgetState::new();
        let first = state.add_file("first.jpg");
        let second = state.add_file("second.jpg");

        assert!(!state.fail_encode(first));
        assert!(state.finish_encode(second, image("second.jpg")));
    }

    // =============================================
    // 送信遷移
    // =============================================

    #[test]
    fn test_begin_submit_without_file() {
        let mut state = WidgetState::new();

        let result = state.begin_submit();
        assert_eq!(result, Err(ClassifyError::NoFileSelected));
        // ネットワーク呼び出しなしで失敗として確定する
        assert_eq!(state.error(), Some(&ClassifyError::NoFileSelected));
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_begin_submit_while_encoding() {
        let mut state = WidgetState::new();
        state.add_file("slow.jpg");

        let result = state.begin_submit();
        assert_eq!(result, Err(ClassifyError::EncodingIncomplete));
    }

    #[test]
    fn test_begin_submit_unreadable_blocks() {
        let mut state = WidgetState::new();
        let token = state.add_file("broken.jpg");
        state.fail_encode(token);

        let result = state.begin_submit();
        assert_eq!(result, Err(ClassifyError::Unreadable));
    }

    #[test]
    fn test_begin_submit_ready() {
        let mut state = WidgetState::new();
        let token = state.add_file("photo.jpg");
        state.finish_encode(token, image("photo.jpg"));

        let result = state.begin_submit();
        assert_eq!(result, Ok("data:image/jpeg;base64,photo.jpg".to_string()));
        assert!(state.is_submitting());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_finish_submit_failed_shows_error() {
        let mut state = WidgetState::new();
        let token = state.add_file("photo.jpg");
        state.finish_encode(token, image("photo.jpg"));
        state.begin_submit().expect("送信開始失敗");

        state.finish_submit(SubmitOutcome::Failed(ClassifyError::NoPrediction));
        assert_eq!(state.error(), Some(&ClassifyError::NoPrediction));
        assert!(state.match_view().is_none());
    }

    #[test]
    fn test_finish_submit_matched_shows_view() {
        let mut state = WidgetState::new();
        let token = state.add_file("photo.jpg");
        state.finish_encode(token, image("photo.jpg"));
        state.begin_submit().expect("送信開始失敗");

        let view = MatchView {
            class: "shaq".to_string(),
            best_score: 0.9,
            rows: vec![],
        };
        state.finish_submit(SubmitOutcome::Matched(view.clone()));
        assert_eq!(state.match_view(), Some(&view));
        assert!(state.error().is_none());
    }

    #[test]
    fn test_resubmit_after_failure() {
        let mut state = WidgetState::new();
        let _ = state.begin_submit();
        assert!(state.error().is_some());

        // 再選択・再送信でやり直せる
        let token = state.add_file("retry.jpg");
        state.finish_encode(token, image("retry.jpg"));
        assert!(state.begin_submit().is_ok());
        assert!(state.error().is_none());
    }
}
