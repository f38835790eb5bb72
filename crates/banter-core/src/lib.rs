pub mod auth;
pub mod engine;
pub mod event_bus;
pub mod history;
pub mod keys;
pub mod ports;
pub mod prefs;
pub mod responder;
