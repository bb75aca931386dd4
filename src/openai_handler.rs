pub mod gpt_handler;
pub mod gpt_request;
