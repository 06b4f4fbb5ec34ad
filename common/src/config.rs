//! ウィジェット設定
//!
//! 送信先エンドポイントとペイロード形式は挙動ではなく構成の選択。
//! 永続化はしない（ページロードごとに既定値から始まる）。

use serde::{Deserialize, Serialize};

/// 画像データを載せるフィールド名（multipart / JSON共通）
pub const IMAGE_DATA_FIELD: &str = "image_data";

/// 既定の分類エンドポイント
pub const DEFAULT_ENDPOINT: &str = "/CLASSIFY_IMAGES";

/// ペイロード形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadFormat {
    /// multipart/form-dataのimage_dataフィールドに載せる
    #[default]
    Multipart,
    /// JSONボディ {"image_data": <dataURL>} で送る
    Json,
}

impl PayloadFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadFormat::Multipart => "multipart",
            PayloadFormat::Json => "json",
        }
    }

    /// フォームのselect値から復元（不明な値はmultipart）
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => PayloadFormat::Json,
            _ => PayloadFormat::Multipart,
        }
    }
}

/// JSONペイロードのボディを生成
pub fn json_body(data_url: &str) -> String {
    let mut body = serde_json::Map::new();
    body.insert(
        IMAGE_DATA_FIELD.to_string(),
        serde_json::Value::String(data_url.to_string()),
    );
    serde_json::Value::Object(body).to_string()
}

/// ウィジェット設定
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// 分類エンドポイントURL（パスのみでも可）
    pub endpoint: String,
    /// ペイロード形式
    pub payload_format: PayloadFormat,
    /// スコア表示の小数桁数
    pub score_precision: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            payload_format: PayloadFormat::default(),
            score_precision: 2,
        }
    }
}
