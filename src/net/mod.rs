pub mod bridge;
pub mod chat_api;
