use std::sync::Arc;

use tracing::{info, warn};

use note2flash::entities::error::AppError;
use note2flash::entities::flashcard::{routes::AppState, FlashcardGenerator};
use note2flash::environment::Config;
use note2flash::logging;
use note2flash::openai_handler::gpt_handler::OpenAiChatClient;
use note2flash::router;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    logging::init_tracing();

    let config = Config::from_env();
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set, every generation will return an API error card");
    }

    let completion = Arc::new(OpenAiChatClient::new(&config));
    let generator = FlashcardGenerator::new(completion, config.openai_model.as_str());
    let app = router::create_router(AppState { generator: Arc::new(generator) });

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(address = %config.bind_address, model = %config.openai_model, "note2flash listening");
    axum::serve(listener, app).await?;
    Ok(())
}
