//! プロンプト生成モジュール
//!
//! CLIとWeb(WASM)で共有されるプロンプトとレスポンススキーマ:
//! - EXTRACTION_PROMPT: 履歴書からの抽出指示
//! - portfolio_schema: Geminiに渡す厳密なレスポンススキーマ

use serde_json::{json, Value};

/// トップレベルの必須フィールド
pub const REQUIRED_FIELDS: &[&str] = &[
    "name",
    "title",
    "tagline",
    "about",
    "skills",
    "experiences",
    "education",
    "projects",
    "contact",
];

/// 履歴書抽出の固定指示
pub const EXTRACTION_PROMPT: &str = "Extract information from this resume and format it into a professional portfolio structure. IMPORTANT: Include 1-2 professional emojis in the 'tagline' and 'about' sections (e.g., 🚀, 💻, ✨) to make it more engaging. Categorize skills properly. If social links are missing, provide placeholders for LinkedIn, GitHub, and X (Twitter) based on the user's name.";

fn string_array() -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" } })
}

/// PortfolioDataと同形のレスポンススキーマ
///
/// 型名はGemini APIのOpenAPIサブセット（OBJECT/ARRAY/STRING）
pub fn portfolio_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "title": { "type": "STRING" },
            "tagline": { "type": "STRING" },
            "about": { "type": "STRING" },
            "skills": string_array(),
            "experiences": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "company": { "type": "STRING" },
                        "role": { "type": "STRING" },
                        "duration": { "type": "STRING" },
                        "description": string_array()
                    },
                    "required": ["company", "role", "duration", "description"]
                }
            },
            "education": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "institution": { "type": "STRING" },
                        "degree": { "type": "STRING" },
                        "year": { "type": "STRING" }
                    },
                    "required": ["institution", "degree", "year"]
                }
            },
            "projects": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "technologies": string_array()
                    },
                    "required": ["title", "description", "technologies"]
                }
            },
            "contact": {
                "type": "OBJECT",
                "properties": {
                    "email": { "type": "STRING" },
                    "location": { "type": "STRING" },
                    "socials": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "platform": { "type": "STRING" },
                                "url": { "type": "STRING" }
                            },
                            "required": ["platform", "url"]
                        }
                    }
                },
                "required": ["email", "location", "socials"]
            }
        },
        "required": REQUIRED_FIELDS
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mentions_conventions() {
        assert!(EXTRACTION_PROMPT.contains("'tagline'"));
        assert!(EXTRACTION_PROMPT.contains("'about'"));
        assert!(EXTRACTION_PROMPT.contains("LinkedIn"));
        assert!(EXTRACTION_PROMPT.contains("GitHub"));
        assert!(EXTRACTION_PROMPT.contains("X (Twitter)"));
    }

    #[test]
    fn test_schema_top_level_required() {
        let schema = portfolio_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, REQUIRED_FIELDS);
        assert_eq!(schema["type"], "OBJECT");
    }

    #[test]
    fn test_schema_properties_match_required() {
        let schema = portfolio_schema();
        let properties = schema["properties"].as_object().unwrap();
        assert_eq!(properties.len(), REQUIRED_FIELDS.len());
        for field in REQUIRED_FIELDS {
            assert!(properties.contains_key(*field), "missing property {}", field);
        }
    }

    #[test]
    fn test_schema_nested_shapes() {
        let schema = portfolio_schema();
        let experience = &schema["properties"]["experiences"]["items"];
        assert_eq!(experience["properties"]["description"]["type"], "ARRAY");
        assert_eq!(experience["required"].as_array().unwrap().len(), 4);

        let socials = &schema["properties"]["contact"]["properties"]["socials"];
        assert_eq!(socials["items"]["properties"]["url"]["type"], "STRING");
    }
}
