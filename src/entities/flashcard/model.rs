use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_CARD_COUNT: u8 = 5;
pub const MIN_CARD_COUNT: u8 = 1;
pub const MAX_CARD_COUNT: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Flashcard {
        Flashcard {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Card shown when the model answered without usable content.
    pub fn no_response() -> Flashcard {
        Flashcard::new("Error occurred", "No response received from AI")
    }

    /// Plain key lookup on one element of the model's `flashcards` array.
    /// Missing keys and non-object elements give empty text.
    pub fn from_value(element: &Value) -> Flashcard {
        Flashcard {
            question: value_text(element.get("question")),
            answer: value_text(element.get("answer")),
        }
    }
}

fn value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// JSON object the model is asked to produce.
#[derive(Debug, Deserialize)]
pub struct FlashcardsPayload {
    #[serde(default)]
    pub flashcards: Option<Value>,
}

impl FlashcardsPayload {
    /// `None` unless `flashcards` is a non-empty array.
    pub fn into_flashcards(self) -> Option<Vec<Flashcard>> {
        match self.flashcards {
            Some(Value::Array(elements)) if !elements.is_empty() => {
                Some(elements.iter().map(Flashcard::from_value).collect())
            }
            _ => None,
        }
    }
}

/// Raw fields of the generation form.
#[derive(Debug, Default)]
pub struct GenerateForm {
    pub topic: Option<String>,
    pub num_cards: Option<String>,
}

impl GenerateForm {
    /// Repeated fields keep their first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> GenerateForm {
        let mut form = GenerateForm::default();
        for (name, value) in pairs {
            match name.as_str() {
                "topic" if form.topic.is_none() => form.topic = Some(value),
                "num_cards" if form.num_cards.is_none() => form.num_cards = Some(value),
                _ => {}
            }
        }
        form
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub topic: String,
    pub count: u8,
}

impl GenerationRequest {
    /// `None` when the topic is blank; the count never fails, it falls back
    /// to the default or gets clamped.
    pub fn from_form(form: &GenerateForm) -> Option<GenerationRequest> {
        let topic = form.topic.as_deref().unwrap_or("").trim();
        if topic.is_empty() {
            return None;
        }
        Some(GenerationRequest {
            topic: topic.to_string(),
            count: parse_card_count(form.num_cards.as_deref()),
        })
    }
}

pub fn parse_card_count(raw: Option<&str>) -> u8 {
    let Some(raw) = raw else {
        return DEFAULT_CARD_COUNT;
    };
    match raw.trim().parse::<i64>() {
        Ok(value) => value.clamp(MIN_CARD_COUNT as i64, MAX_CARD_COUNT as i64) as u8,
        Err(error) => match error.kind() {
            IntErrorKind::PosOverflow => MAX_CARD_COUNT,
            IntErrorKind::NegOverflow => MIN_CARD_COUNT,
            _ => DEFAULT_CARD_COUNT,
        },
    }
}
