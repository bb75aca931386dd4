use std::sync::Arc;

use tracing::{error, info};

use crate::entities::error::AppError;
use crate::entities::flashcard::error_classifier::ErrorClassifier;
use crate::entities::flashcard::model::{Flashcard, FlashcardsPayload};
use crate::openai_handler::gpt_handler::ChatCompletion;
use crate::openai_handler::gpt_request::CompletionOptions;

pub const SYSTEM_PROMPT: &str =
    "You are an expert educator who creates high-quality study flashcards.";
pub const MAX_OUTPUT_TOKENS: u32 = 1000;

pub struct FlashcardGenerator {
    completion: Arc<dyn ChatCompletion>,
    model: String,
    classifier: ErrorClassifier,
}

impl FlashcardGenerator {
    pub fn new(completion: Arc<dyn ChatCompletion>, model: impl Into<String>) -> Self {
        Self {
            completion,
            model: model.into(),
            classifier: ErrorClassifier::default(),
        }
    }

    pub fn with_classifier(mut self, classifier: ErrorClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Always returns at least one card: failures come back as a single
    /// error card chosen by the classifier.
    pub async fn generate(&self, topic: &str, count: u8) -> Vec<Flashcard> {
        match self.request_flashcards(topic, count).await {
            Ok(flashcards) => flashcards,
            Err(err) => {
                error!("Error generating flashcards: {}", err);
                vec![self.classifier.classify(&err.to_string())]
            }
        }
    }

    async fn request_flashcards(&self, topic: &str, count: u8) -> Result<Vec<Flashcard>, AppError> {
        let options = CompletionOptions::new(self.model.as_str(), MAX_OUTPUT_TOKENS).json();
        let user_prompt = build_user_prompt(topic, count);

        let content = self
            .completion
            .complete(SYSTEM_PROMPT, &user_prompt, &options)
            .await?;

        let content = match content {
            Some(content) if !content.trim().is_empty() => content,
            _ => return Ok(vec![Flashcard::no_response()]),
        };

        let payload: FlashcardsPayload = serde_json::from_str(&content)?;
        match payload.into_flashcards() {
            Some(flashcards) => {
                info!(topic, requested = count, received = flashcards.len(), "flashcards generated");
                Ok(flashcards)
            }
            _ => Ok(vec![Flashcard::no_response()]),
        }
    }
}

pub fn build_user_prompt(topic: &str, count: u8) -> String {
    format!(
        "Create {count} educational flashcards about: {topic}

Generate clear, educational question-and-answer pairs that would help someone study this topic.
Make the questions specific and the answers concise but informative.

Respond with valid JSON in this exact format:
{{
    \"flashcards\": [
        {{\"question\": \"Your question here?\", \"answer\": \"Your answer here\"}},
        {{\"question\": \"Another question?\", \"answer\": \"Another answer\"}}
    ]
}}"
    )
}
