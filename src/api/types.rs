//! Wire types and prompt builders for the generate-content endpoint

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Model the landing page requests suggestions from
pub const MODEL: &str = "gemini-2.5-flash-preview-05-20";

/// Full endpoint URL for the configured model
pub fn endpoint_url(api_key: &str) -> String {
    format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{MODEL}:generateContent?key={api_key}"
    )
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

impl GenerateRequest {
    /// Single user-role prompt with no generation config
    pub fn user_prompt(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: text.into() }],
            }],
            generation_config: None,
        }
    }
}

impl GenerateResponse {
    /// Text of the first candidate's first part, if any
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .first()
            .map(|part| part.text.as_str())
    }
}

/// Prompt for three skill suggestions, constrained to a JSON string array
pub fn skill_list_request(interest: &str) -> GenerateRequest {
    let prompt = format!(
        "Based on the interest \"{interest}\", suggest three specific, modern skills \
         a teenager in Bangladesh could learn for a successful career. Return ONLY a \
         valid JSON array of strings. Example: [\"Web Development\", \"Digital Marketing\", \
         \"Graphic Design\"]"
    );
    let mut request = GenerateRequest::user_prompt(prompt);
    request.generation_config = Some(GenerationConfig {
        response_mime_type: "application/json".to_string(),
        response_schema: json!({ "type": "ARRAY", "items": { "type": "STRING" } }),
    });
    request
}

/// Prompt for a short free-text explanation of one skill
pub fn skill_detail_request(skill: &str) -> GenerateRequest {
    GenerateRequest::user_prompt(format!(
        "In 2-3 engaging sentences, explain why a teenager in Bangladesh should learn \
         \"{skill}\". Focus on career opportunities and future growth within the \
         country's tech and business landscape."
    ))
}

/// Parse the constrained skill-list payload
pub fn parse_skill_list(text: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_list_request_serializes_with_schema() {
        let value = serde_json::to_value(skill_list_request("robotics")).unwrap();
        assert_eq!(value["contents"][0]["role"], "user");
        let prompt = value["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("\"robotics\""));
        assert_eq!(value["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "ARRAY");
    }

    #[test]
    fn detail_request_omits_generation_config() {
        let value = serde_json::to_value(skill_detail_request("Web Development")).unwrap();
        assert!(value.get("generationConfig").is_none());
        let prompt = value["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("\"Web Development\""));
    }

    #[test]
    fn first_text_walks_the_candidate_tree() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    { "content": { "role": "model", "parts": [{ "text": "[\"A\", \"B\"]" }] } }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(response.first_text(), Some("[\"A\", \"B\"]"));
    }

    #[test]
    fn empty_response_has_no_text() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn skill_list_parsing() {
        assert_eq!(
            parse_skill_list(r#"["Web Development", "Digital Marketing"]"#).unwrap(),
            vec!["Web Development", "Digital Marketing"]
        );
        assert!(parse_skill_list("not json").is_err());
        assert!(parse_skill_list(r#"{"skills": []}"#).is_err());
    }

    #[test]
    fn endpoint_embeds_model_and_key() {
        let url = endpoint_url("k123");
        assert!(url.contains(MODEL));
        assert!(url.ends_with("?key=k123"));
    }
}
