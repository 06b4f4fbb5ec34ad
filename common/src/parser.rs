//! 分類レスポンスの寛容パース
//!
//! バックエンドは要素単位で欠損したJSONを返すことがあるため、
//! 配列全体を一括でデコードせず要素ごとにデコードし、
//! 不正な要素は走査を中断せずに読み飛ばす。

use serde_json::Value;

use crate::error::{ClassifyError, Result};
use crate::types::{ClassificationResponse, ClassificationResult};

/// JSON値の配列を要素単位でデコードする
///
/// デコードできない要素（classがnull、class_probabilityが配列でない等）
/// はスキップする。
pub fn parse_entries(values: &[Value]) -> ClassificationResponse {
    values
        .iter()
        .filter_map(|value| serde_json::from_value::<ClassificationResult>(value.clone()).ok())
        .collect()
}

/// レスポンスボディ（JSONテキスト）をパースする
///
/// トップレベルが配列でない場合はリクエスト失敗として扱う。
pub fn parse_response(body: &str) -> Result<ClassificationResponse> {
    let values: Vec<Value> =
        serde_json::from_str(body).map_err(|e| ClassifyError::Request(e.to_string()))?;
    Ok(parse_entries(&values))
}
