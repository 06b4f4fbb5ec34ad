//! エラー型定義

use thiserror::Error;

/// ウィジェット共通エラー型
///
/// 種別は分かれているが、いずれも同じエラー領域に表示される。
/// 致命的なものはなく、ユーザーは再選択・再送信でやり直せる。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("画像ファイルを選択してください")]
    NoFileSelected,

    #[error("画像の読み込みが完了していません")]
    EncodingIncomplete,

    #[error("画像ファイルを読み込めませんでした")]
    Unreadable,

    #[error("分類リクエストに失敗しました: {0}")]
    Request(String),

    #[error("判定結果が得られませんでした")]
    NoPrediction,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, ClassifyError>;
