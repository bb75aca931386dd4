use std::sync::Arc;

use axum::{
    debug_handler,
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::info;

use crate::entities::flashcard::{
    generator::FlashcardGenerator,
    model::{GenerateForm, GenerationRequest},
    views,
};

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<FlashcardGenerator>,
}

pub async fn home_route() -> Html<&'static str> {
    Html(views::render_index())
}

/// An absent or undecodable body reads as a blank form.
#[debug_handler]
pub async fn generate_route(
    State(state): State<AppState>,
    form: Option<Form<Vec<(String, String)>>>,
) -> Response {
    let form = form
        .map(|Form(pairs)| GenerateForm::from_pairs(pairs))
        .unwrap_or_default();
    let Some(request) = GenerationRequest::from_form(&form) else {
        info!("empty topic submitted, redirecting to the form");
        return Redirect::to("/").into_response();
    };

    let flashcards = state.generator.generate(&request.topic, request.count).await;
    Html(views::render_results(&request.topic, &flashcards)).into_response()
}
