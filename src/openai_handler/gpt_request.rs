use serde::Serialize;

/// Per-call knobs for a chat completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOptions {
    pub model: String,
    pub max_tokens: u32,
    pub json_output: bool,
}

impl CompletionOptions {
    pub fn new(model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            json_output: false,
        }
    }

    pub fn json(mut self) -> Self {
        self.json_output = true;
        self
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GPTRequest {
    pub model: String,
    pub messages: Vec<GPTMessage>,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub(crate) struct GPTMessage {
    pub role: String,
    pub content: String,
}

impl GPTRequest {
    pub fn new(system_prompt: &str, user_prompt: &str, options: &CompletionOptions) -> Self {
        GPTRequest {
            model: options.model.clone(),
            messages: vec![
                GPTMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                GPTMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            max_tokens: options.max_tokens,
            response_format: options
                .json_output
                .then(|| serde_json::json!({ "type": "json_object" })),
        }
    }
}
