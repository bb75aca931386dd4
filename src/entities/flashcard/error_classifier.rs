use crate::entities::flashcard::model::Flashcard;

/// Maps a failure message to a card when any of its needles appears in it.
#[derive(Debug, Clone)]
pub struct ClassificationRule {
    pub needles: Vec<String>,
    pub card: Flashcard,
}

impl ClassificationRule {
    pub fn new(needles: &[&str], question: &str, answer: &str) -> Self {
        Self {
            needles: needles.iter().map(|needle| needle.to_lowercase()).collect(),
            card: Flashcard::new(question, answer),
        }
    }

    fn matches(&self, lowered_message: &str) -> bool {
        self.needles
            .iter()
            .any(|needle| lowered_message.contains(needle.as_str()))
    }
}

/// Ordered rule list, first match wins. Messages no rule matches get a
/// generic card embedding the raw text.
#[derive(Debug, Clone)]
pub struct ErrorClassifier {
    rules: Vec<ClassificationRule>,
}

impl ErrorClassifier {
    pub fn new(rules: Vec<ClassificationRule>) -> Self {
        Self { rules }
    }

    pub fn classify(&self, message: &str) -> Flashcard {
        let lowered = message.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.card.clone())
            .unwrap_or_else(|| {
                Flashcard::new(
                    "Generation Error",
                    format!("Sorry, there was an error generating flashcards: {}", message),
                )
            })
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        // Order matters: upstream messages often mention several of these words.
        ErrorClassifier::new(vec![
            ClassificationRule::new(
                &["model"],
                "Model Error",
                "The AI model is not available. Please try again or contact support if the issue persists.",
            ),
            ClassificationRule::new(
                &["quota", "insufficient"],
                "Quota Exceeded",
                "Your OpenAI account has exceeded its usage quota. Please check your billing details at platform.openai.com or add credits to your account.",
            ),
            ClassificationRule::new(
                &["api", "key"],
                "API Error",
                "There was an issue with the API connection. Please check your API key and try again.",
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_failures_point_to_billing() {
        let card = ErrorClassifier::default()
            .classify("Error code: 429 - {\"error\":{\"code\":\"insufficient_quota\"}}");
        assert_eq!(card.question, "Quota Exceeded");
        assert!(card.answer.contains("billing"));
        assert!(card.answer.contains("quota"));
    }

    #[test]
    fn invalid_key_failures_mention_the_api_key() {
        let card = ErrorClassifier::default().classify("invalid api key");
        assert_eq!(card.question, "API Error");
        assert!(card.answer.contains("API key"));
    }

    #[test]
    fn model_rule_wins_over_later_rules() {
        let card = ErrorClassifier::default()
            .classify("The model `gpt-x` does not exist or your key has insufficient quota");
        assert_eq!(card.question, "Model Error");
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(ErrorClassifier::default().classify("MODEL NOT FOUND").question, "Model Error");
        assert_eq!(ErrorClassifier::default().classify("Invalid KEY").question, "API Error");
    }

    #[test]
    fn unmatched_failures_embed_the_raw_text() {
        let card = ErrorClassifier::default().classify("Error code: 500 - upstream exploded");
        assert_eq!(card.question, "Generation Error");
        assert_eq!(
            card.answer,
            "Sorry, there was an error generating flashcards: Error code: 500 - upstream exploded"
        );
    }

    #[test]
    fn custom_rules_replace_the_defaults() {
        let classifier = ErrorClassifier::new(vec![ClassificationRule::new(
            &["Timeout"],
            "Too slow",
            "The service took too long.",
        )]);
        assert_eq!(classifier.classify("request timeout").question, "Too slow");
        assert_eq!(classifier.classify("invalid api key").question, "Generation Error");
    }
}
