pub mod error_classifier;
pub mod generator;
pub mod model;
pub mod routes;
pub mod views;

pub use generator::FlashcardGenerator;
pub use model::Flashcard;
