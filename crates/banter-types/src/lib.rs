pub mod message;
pub mod event;
pub mod theme;
pub mod user;
pub mod transfer;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::ChatError;
pub type Result<T> = std::result::Result<T, ChatError>;
