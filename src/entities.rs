pub mod error;
pub mod flashcard;
