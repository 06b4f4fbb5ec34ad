//! 分類エンドポイントへの送信
//!
//! エンコード済み画像をPOSTし、候補配列を受け取る。
//! 1回の送信につきリクエストは1回だけ。リトライもタイムアウトもない。

use celeb_classify_common::{json_body, parse_entries, ClassificationResponse, PayloadFormat, IMAGE_DATA_FIELD};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

/// 分類リクエストを送信する
///
/// # Arguments
/// * `endpoint` - 分類エンドポイントURL
/// * `format` - ペイロード形式（multipart / JSON）
/// * `data_url` - Base64エンコード済み画像のData URL
///
/// # Returns
/// デコードできた候補のみを含むレスポンス（不正な要素は除外済み）。
/// 非2xxステータスと通信エラーは区別せずErrにする。
pub async fn classify_image(
    endpoint: &str,
    format: PayloadFormat,
    data_url: &str,
) -> Result<ClassificationResponse, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    match format {
        PayloadFormat::Multipart => {
            let form = FormData::new()?;
            form.append_with_str(IMAGE_DATA_FIELD, data_url)?;
            opts.set_body(form.as_ref());
        }
        PayloadFormat::Json => {
            opts.set_body(&JsValue::from_str(&json_body(data_url)));
        }
    }

    let request = Request::new_with_str_and_init(endpoint, &opts)?;
    if format == PayloadFormat::Json {
        request.headers().set("Content-Type", "application/json")?;
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let values: Vec<serde_json::Value> = serde_wasm_bindgen::from_value(json)?;
    Ok(parse_entries(&values))
}
