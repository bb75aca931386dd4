pub mod entities;
pub mod environment;
pub mod logging;
pub mod openai_handler;
pub mod router;
