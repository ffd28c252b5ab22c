//! APIレスポンスパーサー
//!
//! Geminiが返したテキストからJSONを抽出し、PortfolioDataにパースする

use crate::error::{Error, Result};
use crate::types::PortfolioData;

/// APIレスポンスからJSON部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 生の {...} オブジェクト
/// 3. エラー
///
/// # Examples
/// ```
/// use folio_common::extract_json;
///
/// let response = "result: {\"name\": \"Jane\"}";
/// assert_eq!(extract_json(response).unwrap(), "{\"name\": \"Jane\"}");
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // "```json" の長さ
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::MalformedResponse("JSON object not found".into()))
}

/// レスポンステキストをPortfolioDataにパース
///
/// # Returns
/// * `Err(EmptyResponse)` - テキストが空
/// * `Err(MalformedResponse)` - JSONが見つからないかスキーマ不一致
pub fn parse_portfolio(response: &str) -> Result<PortfolioData> {
    if response.trim().is_empty() {
        return Err(Error::EmptyResponse);
    }

    let json_str = extract_json(response)?;
    serde_json::from_str(json_str.trim())
        .map_err(|e| Error::MalformedResponse(format!("portfolio JSON parse error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "name": "Jane Doe", "title": "Engineer", "tagline": "Hi 👋", "about": "About ✨",
        "skills": [], "experiences": [], "education": [], "projects": [],
        "contact": {"email": "", "location": "", "socials": []}
    }"#;

    #[test]
    fn test_extract_json_with_block() {
        let response = "Here you go:\n```json\n{\"name\": \"A\"}\n```\nbye";
        assert_eq!(extract_json(response).unwrap(), "{\"name\": \"A\"}");
    }

    #[test]
    fn test_extract_json_raw_object() {
        assert_eq!(extract_json("{\"k\": 1}").unwrap(), "{\"k\": 1}");
    }

    #[test]
    fn test_extract_json_not_found() {
        let err = extract_json("no json here").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_portfolio_minimal() {
        let data = parse_portfolio(MINIMAL).unwrap();
        assert_eq!(data.name, "Jane Doe");
        assert!(data.contact.socials.is_empty());
    }

    #[test]
    fn test_parse_portfolio_fenced() {
        let fenced = format!("```json\n{}\n```", MINIMAL);
        assert_eq!(parse_portfolio(&fenced).unwrap().title, "Engineer");
    }

    #[test]
    fn test_parse_portfolio_empty() {
        assert!(matches!(parse_portfolio(""), Err(Error::EmptyResponse)));
        assert!(matches!(parse_portfolio("  \n"), Err(Error::EmptyResponse)));
    }

    #[test]
    fn test_parse_portfolio_missing_field() {
        let err = parse_portfolio(r#"{"name": "Jane"}"#).unwrap_err();
        match err {
            Error::MalformedResponse(detail) => assert!(detail.contains("missing field")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_portfolio_wrong_type() {
        let broken = MINIMAL.replace("\"skills\": []", "\"skills\": \"Rust\"");
        assert!(matches!(parse_portfolio(&broken), Err(Error::MalformedResponse(_))));
    }
}
