pub mod chat;
pub mod exercise;
pub mod flashcards;
