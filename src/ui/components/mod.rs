pub mod chat_panel;
pub mod cheat_sheet;
pub mod exercise_card;
pub mod flashcard;
pub mod grammar_view;
pub mod lesson_browser;
pub mod progress_bar;
pub mod summary;
pub mod tab_bar;
pub mod type_menu;
pub mod vocab_list;
