//! 分類レスポンスの型定義
//!
//! バックエンドの分類APIが返すJSON配列の要素:
//! - class: 判定されたクラスID（表示テンプレートのキー）
//! - class_probability: サブクラスごとの確率スコア列
//! - class_dictionary: 人名 -> class_probabilityインデックスの辞書

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 分類候補1件
///
/// classやclass_probabilityを欠く要素は不正としてパーサ側で除外する。
/// class_dictionaryとerrorは欠落を許容する。サーバは入力不備のとき
/// classがnullでerrorにメッセージの入った要素を返すことがある。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub class: String,
    pub class_probability: Vec<f64>,
    #[serde(default)]
    pub class_dictionary: HashMap<String, usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 分類レスポンス全体（0件以上、順序あり）
///
/// 空の場合は「判定結果なし」を意味する。
pub type ClassificationResponse = Vec<ClassificationResult>;
