// Library target exists for the criterion benches and integration tests.
// The binary entry point is main.rs; this file re-declares the module tree
// so harnesses can import types via `deutschmeister::content::*` /
// `deutschmeister::session::*`. Most code is only exercised through the
// binary, so suppress dead_code warnings.
#![allow(dead_code)]

// Public: used directly by benches and integration tests
pub mod content;
pub mod net;
pub mod session;

// Private: required transitively by the modules above and the app shell
mod app;
mod config;
mod event;
mod ui;
