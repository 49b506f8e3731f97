//! Swara Games
//!
//! Session-authenticated web service for small music-education games:
//! - Pattern recall over a twelve-note solfege vocabulary
//! - Identify the sour note in a short melody
//! - Navarasa: match an audio clip to its emotion

pub mod error;
pub mod config;
pub mod telemetry;
pub mod games;
pub mod auth;
pub mod session;
pub mod guard;
pub mod pages;
pub mod server;

// Re-exports for convenience
pub use config::ServerConfig;
pub use error::GameError;
pub use server::{app, run_server, AppState};
