//! OpenAI response parsing
//!
//! Public functions for parsing OpenAI-compatible chat completion JSON.

use crate::llm::adapters::AdapterError;
use serde_json::Value as JsonValue;

/// Parse chat completion JSON response into `choices[0].message.content`
pub fn parse_chat_completion(response: &str) -> Result<String, AdapterError> {
    let json: JsonValue = serde_json::from_str(response)?;

    if let Some(error) = json.get("error") {
        let message = error
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Err(AdapterError::InvalidResponse(message));
    }

    let content = json["choices"]
        .get(0)
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .ok_or_else(|| {
            AdapterError::InvalidResponse("Missing choices[0].message.content".to_string())
        })?;

    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chat_completion_valid() {
        let json = r#"{"choices":[{"message":{"content":"test content"}}]}"#;
        let result = parse_chat_completion(json);
        assert_eq!(result.unwrap(), "test content");
    }

    #[test]
    fn test_parse_chat_completion_missing_choices() {
        let json = r#"{"model":"Qwen/Qwen3-VL-30B-A3B-Instruct"}"#;
        let result = parse_chat_completion(json);
        assert!(matches!(result, Err(AdapterError::InvalidResponse(_))));
    }

    #[test]
    fn test_parse_chat_completion_not_json() {
        let result = parse_chat_completion("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(AdapterError::Json(_))));
    }

    #[test]
    fn test_parse_chat_completion_error_body() {
        let json = r#"{"error":{"message":"model not found"}}"#;
        match parse_chat_completion(json) {
            Err(AdapterError::InvalidResponse(msg)) => assert_eq!(msg, "model not found"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
