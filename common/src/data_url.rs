//! Data URLユーティリティ
//!
//! 選択された画像の生バイト列とBase64 Data URLの相互変換

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// MIMEタイプが取れない場合のフォールバック
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// バイト列からBase64 Data URLを生成
///
/// # Arguments
/// * `bytes` - 画像の生バイト列
/// * `mime_type` - MIMEタイプ（空文字の場合はimage/jpegにフォールバック）
///
/// # Returns
/// "data:image/jpeg;base64,..." 形式のData URL
pub fn encode_data_url(bytes: &[u8], mime_type: &str) -> String {
    let mime = if mime_type.is_empty() {
        DEFAULT_MIME_TYPE
    } else {
        mime_type
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
///
/// # Returns
/// Base64エンコードされたデータ部分、または抽出失敗時はNone
pub fn extract_base64(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,..." 形式のData URL
///
/// # Returns
/// MIMEタイプ（例: "image/jpeg"）、抽出失敗時はimage/jpegを返す
pub fn extract_mime_type(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or(DEFAULT_MIME_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_data_url_png() {
        let data_url = encode_data_url(&PNG_MAGIC, "image/png");
        assert_eq!(data_url, "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_encode_data_url_empty_mime_falls_back() {
        let data_url = encode_data_url(&PNG_MAGIC, "");
        assert!(data_url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_encode_then_extract() {
        let data_url = encode_data_url(b"hello", "image/webp");
        assert_eq!(extract_mime_type(&data_url), "image/webp");
        assert_eq!(extract_base64(&data_url), Some("aGVsbG8="));
    }

    #[test]
    fn test_extract_base64_jpeg() {
        let data_url = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";
        assert_eq!(extract_base64(data_url), Some("/9j/4AAQSkZJRg=="));
    }

    #[test]
    fn test_extract_base64_invalid() {
        assert_eq!(extract_base64("not a data url"), None);
        assert_eq!(extract_base64(""), None);
    }

    #[test]
    fn test_extract_mime_type_png() {
        let data_url = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(extract_mime_type(data_url), "image/png");
    }

    #[test]
    fn test_extract_mime_type_default() {
        // 不正なフォーマットの場合はデフォルト値を返す
        assert_eq!(extract_mime_type("invalid"), "image/jpeg");
    }
}
